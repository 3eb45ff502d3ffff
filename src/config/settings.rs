// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器与数据集来源的所有配置项。数据源地址与本地缓存
/// 文件名是显式配置而非进程级常量，便于测试时替换。
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据集配置
    pub dataset: DatasetSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 指标导出配置设置
#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    /// Prometheus导出器监听地址
    pub listen_addr: String,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据集配置设置
#[derive(Debug, Deserialize)]
pub struct DatasetSettings {
    /// 远程数据源URL（UnicodeData.txt）
    pub source_url: String,
    /// 本地缓存文件路径
    pub cache_path: String,
    /// 下载超时时间（秒）
    pub download_timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default dataset settings
            .set_default(
                "dataset.source_url",
                "http://www.unicode.org/Public/UNIDATA/UnicodeData.txt",
            )?
            .set_default("dataset.cache_path", "UnicodeData.txt")?
            .set_default("dataset.download_timeout_secs", 30)?
            // Default metrics settings
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CHARFIND").separator("__"));

        builder.build()?.try_deserialize()
    }
}
