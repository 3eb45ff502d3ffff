// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

/// 将文本规范化为大写词集合
///
/// 算法：转为大写，连字符替换为空格，按空白连续段切分，
/// 丢弃空词。纯函数，无失败情形。
///
/// 存储的名称与查询文本必须经过同一规范化，匹配才是对称的。
///
/// # 参数
///
/// * `text` - 待规范化的文本
///
/// # 返回值
///
/// 返回规范化后的词集合（重复词合并，顺序无关）
pub fn normalize(text: &str) -> HashSet<String> {
    text.to_uppercase()
        .replace('-', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
