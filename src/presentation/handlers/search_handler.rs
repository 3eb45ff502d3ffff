// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, RawQuery},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::dto::search_response::CharNameResponse,
    domain::{
        repositories::char_name_repository::CharNameRepository,
        services::search_service::{SearchService, SearchServiceError},
    },
    infrastructure::metrics::{SEARCH_REJECTED_TOTAL, SEARCH_REQUESTS_TOTAL, SEARCH_RESULTS},
    presentation::errors::encode_response,
};

/// 处理搜索请求
///
/// 将原始查询串展开为参数多值映射后交给搜索服务，
/// 服务错误在此映射为HTTP状态码与结构化错误响应。
///
/// # 参数
///
/// * `repo` - 字符名称仓库实例
/// * `raw_query` - 原始查询串（保留同名参数的多个值）
///
/// # 返回值
///
/// 返回实现了 `IntoResponse` 的响应，包含搜索结果或错误信息
pub async fn search<R>(
    Extension(repo): Extension<Arc<R>>,
    RawQuery(raw_query): RawQuery,
) -> impl IntoResponse
where
    R: CharNameRepository + 'static,
{
    metrics::counter!(SEARCH_REQUESTS_TOTAL).increment(1);

    let params = parse_query_params(raw_query.as_deref().unwrap_or(""));

    let service = SearchService::new(repo);
    match service.search(&params).await {
        Ok(results) => {
            metrics::histogram!(SEARCH_RESULTS).record(results.len() as f64);
            encode_response(StatusCode::OK, &CharNameResponse::success(results))
        }
        Err(e) => {
            metrics::counter!(SEARCH_REJECTED_TOTAL, "reason" => reason_label(&e)).increment(1);
            let (status, message): (StatusCode, String) = e.into();
            encode_response(status, &CharNameResponse::error(message))
        }
    }
}

impl From<SearchServiceError> for (StatusCode, String) {
    fn from(err: SearchServiceError) -> Self {
        let status = match err {
            SearchServiceError::InvalidQuery | SearchServiceError::EmptyQuery => {
                StatusCode::BAD_REQUEST
            }
            SearchServiceError::DataUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, err.to_string())
    }
}

fn reason_label(err: &SearchServiceError) -> &'static str {
    match err {
        SearchServiceError::InvalidQuery => "invalid_query",
        SearchServiceError::EmptyQuery => "empty_query",
        SearchServiceError::DataUnavailable(_) => "data_unavailable",
    }
}

/// 将原始查询串解析为参数名到值序列的映射
///
/// 同名参数的值按出现顺序聚合，校验逻辑依赖这一顺序。
fn parse_query_params(raw_query: &str) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}
