// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::Write;

use axum::response::Html;
use html_escape::encode_text;
use serde_json::Value;

use crate::domain::models::scrape::{ScrapeRecord, ScrapeResult};
use crate::domain::models::session::UserProfile;

const SCRAPE_TEMPLATE: &str = include_str!("../../../templates/scrape_dashboard.html");
const OAUTH_TEMPLATE: &str = include_str!("../../../templates/oauth_dashboard.html");
const CONTENT_SLOT: &str = "{{ content }}";

/// 抓取仪表盘
///
/// 初次加载和抓取完成后共用同一个模板，唯一的可选字段是抓取结果
pub struct ScrapeDashboard<'a> {
    scraped_data: Option<&'a ScrapeResult>,
}

impl<'a> ScrapeDashboard<'a> {
    /// 无数据渲染（初次加载）
    pub fn empty() -> Self {
        Self { scraped_data: None }
    }

    /// 带数据渲染（抓取完成后）
    pub fn with_data(scraped_data: &'a ScrapeResult) -> Self {
        Self {
            scraped_data: Some(scraped_data),
        }
    }

    pub fn render(&self) -> Html<String> {
        let content = match self.scraped_data {
            None => {
                r#"    <p class="empty">Submit a profile URL to see scraped posts.</p>"#.to_string()
            }
            Some(records) if records.is_empty() => {
                r#"    <p class="no-records">The scraper returned no records.</p>"#.to_string()
            }
            Some(records) => records.iter().fold(String::new(), |mut out, record| {
                render_record(&mut out, record);
                out
            }),
        };
        Html(SCRAPE_TEMPLATE.replace(CONTENT_SLOT, &content))
    }
}

fn render_record(out: &mut String, record: &ScrapeRecord) {
    out.push_str("    <article class=\"record\">\n      <dl>\n");
    for (key, value) in record {
        let value = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "        <dt>{}</dt><dd>{}</dd>",
            encode_text(key),
            encode_text(&value)
        );
    }
    out.push_str("      </dl>\n    </article>\n");
}

/// 会话仪表盘
///
/// 原样展示会话中的用户；没有用户时展示登录入口
pub struct SessionDashboard<'a> {
    user: Option<&'a UserProfile>,
}

impl<'a> SessionDashboard<'a> {
    pub fn new(user: Option<&'a UserProfile>) -> Self {
        Self { user }
    }

    pub fn render(&self) -> Html<String> {
        let content = match self.user {
            Some(user) => format!(
                "  <dl class=\"profile\">\n    <dt>Username</dt><dd class=\"username\">{}</dd>\n    <dt>ID</dt><dd class=\"user-id\">{}</dd>\n  </dl>",
                encode_text(&user.username),
                encode_text(&user.id)
            ),
            None => r#"  <p>You are not logged in.</p>
  <a class="login" href="/login">Log in with Instagram</a>"#
                .to_string(),
        };
        Html(OAUTH_TEMPLATE.replace(CONTENT_SLOT, &content))
    }
}
