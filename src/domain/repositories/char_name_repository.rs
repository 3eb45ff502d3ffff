// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::char_name::CharName;
use async_trait::async_trait;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 本地缓存读取错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 远程数据源下载错误
    #[error("Download error: {0}")]
    Download(#[from] reqwest::Error),
}

/// 字符名称仓库特质
///
/// 定义字符数据集的加载接口。实现负责获取并缓存原始数据；
/// 核心逻辑只消费已完整解析的数据集，永远不会看到部分填充的状态。
#[async_trait]
pub trait CharNameRepository: Send + Sync {
    /// 加载完整的字符名称数据集（保持源顺序）
    async fn load(&self) -> Result<Vec<CharName>, RepositoryError>;
}
