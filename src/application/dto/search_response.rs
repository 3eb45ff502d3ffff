// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::char_name::CharName;
use serde::{Deserialize, Serialize};

/// 找到结果时的提示语
pub const MESSAGE_FOUND: &str = "Found these results for your search";
/// 无匹配时的提示语（仍为成功响应）
pub const MESSAGE_NOT_FOUND: &str = "Could not find any results for the given query";

/// 搜索响应数据传输对象
///
/// 错误响应中 `charNames` 序列化为 null；
/// 成功但无匹配时序列化为空数组。
#[derive(Debug, Serialize, Deserialize)]
pub struct CharNameResponse {
    pub status: String,
    pub message: String,
    #[serde(rename = "charNames")]
    pub char_names: Option<Vec<CharName>>,
}

impl CharNameResponse {
    /// 构造成功响应，按结果是否为空选择提示语
    pub fn success(char_names: Vec<CharName>) -> Self {
        let message = if char_names.is_empty() {
            MESSAGE_NOT_FOUND
        } else {
            MESSAGE_FOUND
        };

        Self {
            status: "success".to_string(),
            message: message.to_string(),
            char_names: Some(char_names),
        }
    }

    /// 构造错误响应
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            char_names: None,
        }
    }
}
