// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用用例模块
///
/// 定义应用程序层的两个流程控制器
/// 负责协调领域服务和会话存储完成一次请求
pub mod oauth_login;
pub mod scrape_profile;
