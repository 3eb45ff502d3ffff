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

use crate::config::settings::DatasetSettings;
use crate::domain::models::char_name::CharName;
use crate::domain::repositories::char_name_repository::{CharNameRepository, RepositoryError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// 字符名称仓库实现
///
/// 基于本地缓存文件与远程数据源的数据访问层。
/// 读取策略：先读缓存文件；失败则从配置的数据源下载一次，
/// 再重读缓存。单次重试之外不做任何自动恢复。
pub struct UnicodeFileRepositoryImpl {
    /// 远程数据源URL
    source_url: String,
    /// 本地缓存文件路径
    cache_path: PathBuf,
    /// HTTP客户端
    client: reqwest::Client,
}

impl UnicodeFileRepositoryImpl {
    /// 创建新的仓库实例
    ///
    /// # 参数
    ///
    /// * `settings` - 数据集配置（数据源URL、缓存路径、下载超时）
    ///
    /// # 返回值
    ///
    /// * `Ok(UnicodeFileRepositoryImpl)` - 新的仓库实例
    /// * `Err(RepositoryError)` - HTTP客户端构建失败
    pub fn new(settings: &DatasetSettings) -> Result<Self, RepositoryError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("charfind/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.download_timeout_secs))
            .build()?;

        Ok(Self {
            source_url: settings.source_url.clone(),
            cache_path: PathBuf::from(&settings.cache_path),
            client,
        })
    }

    /// 读取并解析本地缓存文件
    async fn read_cache(&self) -> Result<Vec<CharName>, RepositoryError> {
        let content = tokio::fs::read_to_string(&self.cache_path).await?;

        let mut char_names = Vec::new();
        for line in content.lines() {
            match parse_unicode_line(line) {
                Some(char_name) => char_names.push(char_name),
                None => {
                    if !line.is_empty() {
                        warn!(line, "skipping malformed unicode data line");
                    }
                }
            }
        }

        Ok(char_names)
    }

    /// 从配置的数据源下载数据并写入缓存文件
    async fn download(&self) -> Result<(), RepositoryError> {
        info!(url = %self.source_url, "downloading unicode data");

        let response = self
            .client
            .get(&self.source_url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        tokio::fs::write(&self.cache_path, &body).await?;
        info!(
            path = %self.cache_path.display(),
            bytes = body.len(),
            "unicode data cached"
        );

        Ok(())
    }
}

#[async_trait]
impl CharNameRepository for UnicodeFileRepositoryImpl {
    /// 加载完整数据集
    ///
    /// 缓存未命中时执行一次"下载后重读"，之后的失败原样上抛。
    async fn load(&self) -> Result<Vec<CharName>, RepositoryError> {
        match self.read_cache().await {
            Ok(char_names) => Ok(char_names),
            Err(e) => {
                warn!(error = %e, "cache miss, fetching from source");
                self.download().await?;
                self.read_cache().await
            }
        }
    }
}

/// 解析一行分号分隔的字符数据
///
/// 字段0为十六进制码点，字段1为规范名称；其余字段忽略。
/// 无法解析的行返回None，由调用方决定跳过策略。
fn parse_unicode_line(line: &str) -> Option<CharName> {
    let mut fields = line.split(';');

    let code = u32::from_str_radix(fields.next()?, 16).ok()?;
    let name = fields.next()?;
    if name.is_empty() {
        return None;
    }

    Some(CharName::new(code, name))
}
