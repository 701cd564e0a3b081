// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个服务一个处理器文件
pub mod oauth_handler;
pub mod scrape_handler;
