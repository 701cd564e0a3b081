// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心定义，包括：
/// - 领域模型（models）：抓取请求与结果、会话状态
/// - 仓库接口（repositories）：会话存储抽象接口
/// - 服务（services）：抓取服务和 OAuth 提供方的抽象
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod repositories;
pub mod services;
