// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

/// 搜索请求总数
pub const SEARCH_REQUESTS_TOTAL: &str = "charfind_search_requests_total";
/// 被拒绝的搜索请求总数（按原因标注）
pub const SEARCH_REJECTED_TOTAL: &str = "charfind_search_rejected_total";
/// 单次搜索返回的匹配条目数
pub const SEARCH_RESULTS: &str = "charfind_search_results";

/// 初始化Prometheus指标导出器
///
/// # 参数
///
/// * `listen_addr` - 导出器监听地址（来自配置）
pub fn init_metrics(listen_addr: &str) {
    let addr: SocketAddr = match listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!("Invalid metrics listen address {}: {}", listen_addr, e);
            return;
        }
    };

    // Ignore install errors so a busy port does not kill the service
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(SEARCH_REQUESTS_TOTAL, "Total search requests received");
    describe_counter!(
        SEARCH_REJECTED_TOTAL,
        "Search requests rejected by validation or data loading"
    );
    describe_histogram!(SEARCH_RESULTS, "Matched entries per successful search");

    info!("Metrics exporter listening on {}", addr);
}
