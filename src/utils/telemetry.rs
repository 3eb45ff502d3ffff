// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化遥测系统
///
/// 过滤级别来自 `RUST_LOG`，缺省为 `info,charfind=debug`。
/// `CHARFIND_LOG_FORMAT=json` 时输出JSON格式日志。
/// 重复调用是无害的空操作，便于测试环境。
pub fn init_telemetry() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,charfind=debug".into());

    let json = std::env::var("CHARFIND_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    // Already-initialized is fine; tests init more than once
    let _ = result;
}
