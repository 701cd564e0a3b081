// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// 单条抓取记录
///
/// 结构完全由上游抓取服务决定，按原样保留
pub type ScrapeRecord = Map<String, Value>;

/// 抓取请求
///
/// 仅在一次请求的生命周期内存在，序列化后即为上游接口的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    /// 目标主页 URL
    #[serde(rename = "directUrls", serialize_with = "single_url")]
    pub url: String,
    /// 结果类型标签
    pub results_type: String,
    /// 结果数量上限
    pub results_limit: u32,
}

fn single_url<S: Serializer>(url: &str, serializer: S) -> Result<S::Ok, S::Error> {
    [url].serialize(serializer)
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>, results_type: impl Into<String>, results_limit: u32) -> Self {
        Self {
            url: url.into(),
            results_type: results_type.into(),
            results_limit,
        }
    }
}

/// 抓取结果
///
/// 上游返回的有序记录集合，不做任何转换
pub type ScrapeResult = Vec<ScrapeRecord>;
