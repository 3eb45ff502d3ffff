// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::char_name::CharName;
use crate::domain::search::normalize::normalize;

/// 按整词包含关系过滤字符名称数据集
///
/// 条目入选当且仅当查询词集合是其名称词集合的子集，
/// 即每个查询词都作为整词出现在名称中（非子串匹配）。
/// 多个查询词按集合处理：顺序无关、重复无关。
///
/// 输出保持数据集原有顺序，不做任何排序或打分。
/// 复杂度为 O(条目数 × 平均名称词数)，该规模下无需索引结构。
///
/// # 参数
///
/// * `entries` - 字符名称数据集（只读，保持源顺序）
/// * `query` - 原始查询词序列
///
/// # 返回值
///
/// 返回匹配条目组成的子序列；空查询返回空序列（不隐含"匹配全部"）
pub fn filter(entries: &[CharName], query: &[String]) -> Vec<CharName> {
    if query.is_empty() {
        return Vec::new();
    }

    // Normalize the whole query once; per-entry work is one name normalization
    let query_terms = normalize(&query.join(" "));

    entries
        .iter()
        .filter(|entry| query_terms.is_subset(&normalize(&entry.name)))
        .cloned()
        .collect()
}
