// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::char_name::CharName;
use crate::domain::repositories::char_name_repository::{CharNameRepository, RepositoryError};
use crate::domain::search::filter::filter;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// 识别的查询参数名
pub const QUERY_PARAM: &str = "query";

/// 搜索服务错误类型
///
/// 校验失败区分两种形态：参数名缺失或无法理解（InvalidQuery）
/// 与参数存在但值为空白（EmptyQuery）。调用方据此能分辨
/// 参数名拼写错误与值意外留空。
#[derive(Error, Debug)]
pub enum SearchServiceError {
    /// 请求形态错误：识别的参数完全缺失，或只带了无法识别的参数
    #[error("Invalid query given")]
    InvalidQuery,
    /// 请求形态正确但值为空白
    #[error("Empty query given")]
    EmptyQuery,
    /// 数据集加载失败（仓库内部重试后仍不可用）
    #[error("Failed to read unicode data")]
    DataUnavailable(#[source] RepositoryError),
}

/// 搜索服务
///
/// 编排一次查询：校验 → 数据集加载 → 整词子集匹配。
/// 所有失败在此收敛为 [`SearchServiceError`]，不向上抛出未分类错误。
pub struct SearchService<R> {
    repo: Arc<R>,
}

impl<R> SearchService<R>
where
    R: CharNameRepository + 'static,
{
    /// 创建新的搜索服务实例
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 校验原始查询参数并提取查询词
    ///
    /// 状态机按声明顺序检查，首个命中的状态决定结果：
    /// 1. 识别的键缺失 → `InvalidQuery`
    /// 2. 键存在但没有任何值 → `InvalidQuery`
    /// 3. 至少一个值是空字符串 → `EmptyQuery`
    /// 4. 一个或多个非空值 → 通过，按原顺序产出查询词
    ///
    /// # 参数
    ///
    /// * `params` - 传输层交付的参数名到值序列的映射
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 校验通过的有序查询词
    /// * `Err(SearchServiceError)` - 具体的拒绝原因
    pub fn validate(
        params: &HashMap<String, Vec<String>>,
    ) -> Result<Vec<String>, SearchServiceError> {
        match params.get(QUERY_PARAM) {
            None => Err(SearchServiceError::InvalidQuery),
            Some(values) if values.is_empty() => Err(SearchServiceError::InvalidQuery),
            Some(values) if values.iter().any(|value| value.is_empty()) => {
                Err(SearchServiceError::EmptyQuery)
            }
            Some(values) => Ok(values.clone()),
        }
    }

    /// 执行一次搜索
    ///
    /// # 参数
    ///
    /// * `params` - 传输层交付的原始查询参数映射
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<CharName>)` - 按数据集顺序排列的匹配条目（可为空）
    /// * `Err(SearchServiceError)` - 校验或数据集加载失败
    pub async fn search(
        &self,
        params: &HashMap<String, Vec<String>>,
    ) -> Result<Vec<CharName>, SearchServiceError> {
        let terms = Self::validate(params)?;

        let dataset = self.repo.load().await.map_err(|e| {
            warn!(error = %e, "unicode dataset unavailable");
            SearchServiceError::DataUnavailable(e)
        })?;

        let results = filter(&dataset, &terms);
        debug!(
            terms = terms.len(),
            dataset = dataset.len(),
            matched = results.len(),
            "search completed"
        );

        Ok(results)
    }
}
