// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTML 视图模块
///
/// 两个仪表盘页面的渲染
pub mod dashboard;
