// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试模块
///
/// 通过 axum-test 驱动完整路由，上游服务由 wiremock 模拟
mod helpers;
mod scrape_flow_test;
