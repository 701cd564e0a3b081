// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 仓库接口定义了状态存取的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 会话仓库（session_repository）：按会话标识读写会话状态
pub mod session_repository;
