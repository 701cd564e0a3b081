// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域层特质的具体实现
pub mod oauth;
pub mod scraper;
pub mod session;
