// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 字符名称条目
///
/// 将一个码点映射到其在字符注册表中的规范大写名称。
/// 名称非空，为大写ASCII，可含连字符与空格。
/// 数据集是按注册表源顺序（码点升序）排列的条目序列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharName {
    /// 码点（无符号32位整数）
    pub char: u32,
    /// 规范大写名称
    pub name: String,
}

impl CharName {
    /// 创建新的字符名称条目
    pub fn new(char: u32, name: impl Into<String>) -> Self {
        Self {
            char,
            name: name.into(),
        }
    }
}
