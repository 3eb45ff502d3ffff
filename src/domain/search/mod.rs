// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 查询匹配模块
///
/// 提供名称规范化与整词子集匹配：
/// - 规范化（normalize）：文本到大写词集合的纯函数
/// - 过滤（filter）：按整词包含关系筛选数据集条目
pub mod filter;
pub mod normalize;
