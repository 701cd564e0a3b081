// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构，包括：
/// - 抓取（scrape）：发往上游的抓取请求和返回的记录集合
/// - 会话（session）：会话标识、用户资料、访问令牌和会话状态
pub mod scrape;
pub mod session;
