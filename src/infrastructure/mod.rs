// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互：
/// - 指标（metrics）：提供系统监控和性能指标收集
/// - 仓库实现（repositories）：字符数据集的下载、缓存与解析
///
/// 基础设施层遵循依赖倒置原则，依赖于领域层的抽象接口，
/// 确保领域层保持纯粹的业务逻辑，不受技术实现的影响。
pub mod metrics;
pub mod repositories;
