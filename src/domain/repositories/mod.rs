// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域仓库模块
///
/// 定义数据访问的抽象接口，具体实现位于基础设施层
pub mod char_name_repository;
