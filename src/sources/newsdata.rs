//! NewsData.io integration.
//!
//! API docs: https://newsdata.io/documentation
//! Base URL: https://newsdata.io/api/1/news
//! Auth: API key via `apikey` query param. Free tier: 200 requests/day,
//! at most 50 results per request.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::NewsSource;
use crate::types::{Article, KabarError};

const BASE_URL: &str = "https://newsdata.io/api/1/news";
const SOURCE_NAME: &str = "newsdata";

/// API hard limit on results per request.
const MAX_PAGE_SIZE: u32 = 50;

// ---------------------------------------------------------------------------
// API response types (NewsData JSON → Rust)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct NewsDataResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<NewsDataItem>,
}

/// We only deserialize the fields we need; everything is defaulted because
/// the free tier omits fields freely.
#[derive(Debug, Deserialize)]
struct NewsDataItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    source_id: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default, rename = "pubDate")]
    pub_date: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl From<NewsDataItem> for Article {
    fn from(item: NewsDataItem) -> Self {
        Article {
            title: item.title,
            description: item.description.unwrap_or_default(),
            content: item.content.unwrap_or_default(),
            source: item.source_id.unwrap_or_else(|| "Unknown".to_string()),
            url: item.link.unwrap_or_default(),
            published_at: item.pub_date.unwrap_or_default(),
            image: item.image_url.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// NewsData.io client.
pub struct NewsDataClient {
    http: Client,
    api_key: String,
}

impl NewsDataClient {
    pub fn new(api_key: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent("kabar/0.1.0")
            .build()
            .context("Failed to build NewsData HTTP client")?;
        Ok(Self { http, api_key })
    }
}

#[async_trait]
impl NewsSource for NewsDataClient {
    async fn fetch<'a>(
        &self,
        query: &str,
        language: &str,
        _region: Option<&'a str>,
        max_results: u32,
    ) -> Result<Vec<Article>> {
        let size = max_results.min(MAX_PAGE_SIZE);

        let resp = self
            .http
            .get(BASE_URL)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("q", query),
                ("language", language),
                ("size", &size.to_string()),
            ])
            .send()
            .await
            .context("NewsData request failed")?;

        if !resp.status().is_success() {
            return Err(KabarError::Source {
                source_name: SOURCE_NAME.to_string(),
                message: format!("HTTP {}", resp.status()),
            }
            .into());
        }

        let data: NewsDataResponse = resp
            .json()
            .await
            .context("Failed to parse NewsData response")?;

        if data.status != "success" {
            return Err(KabarError::Source {
                source_name: SOURCE_NAME.to_string(),
                message: format!("API status: {}", data.status),
            }
            .into());
        }

        debug!(count = data.results.len(), language, "NewsData articles fetched");
        Ok(data.results.into_iter().map(Article::from).collect())
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
