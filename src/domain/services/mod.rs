// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - OAuth 服务（oauth_service）：授权码交换和用户资料获取
/// - 抓取服务（scrape_service）：调用上游抓取 API
pub mod oauth_service;
pub mod scrape_service;
