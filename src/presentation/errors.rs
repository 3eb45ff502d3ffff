// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_response::CharNameResponse;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

/// 响应编码失败时的兜底响应体
///
/// 编码兜底响应体本身不会失败，因此保持为静态字符串。
const SERIALIZATION_FAILURE_BODY: &str =
    r#"{"status":"error","message":"Failed to encode response","charNames":null}"#;

/// 将响应对象编码为JSON HTTP响应
///
/// 所有搜索端点的出口。编码失败是致命的内部错误，
/// 以500和兜底响应体收场，绝不panic。
///
/// # 参数
///
/// * `status` - HTTP状态码
/// * `response` - 待编码的响应对象
///
/// # 返回值
///
/// 返回完整的HTTP响应
pub fn encode_response(status: StatusCode, response: &CharNameResponse) -> Response {
    match serde_json::to_string(response) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to serialize response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                SERIALIZATION_FAILURE_BODY,
            )
                .into_response()
        }
    }
}
