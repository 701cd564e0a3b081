// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 会话基础设施模块
///
/// 提供会话存储的内存实现和签名 Cookie 编解码
pub mod cookie;
pub mod memory_store;
