//! GNews integration.
//!
//! API docs: https://gnews.io/docs/v4
//! Base URL: https://gnews.io/api/v4/search
//! Auth: API key via `apikey` query param. Free tier: 100 requests/day,
//! at most 100 results per request. Supports country-scoped queries, which
//! is what makes the "local" scope group work.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::NewsSource;
use crate::types::{Article, KabarError};

const BASE_URL: &str = "https://gnews.io/api/v4/search";
const SOURCE_NAME: &str = "gnews";

/// API hard limit on results per request.
const MAX_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// API response types (GNews JSON → Rust)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GNewsResponse {
    #[serde(default)]
    articles: Vec<GNewsItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GNewsItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    source: Option<GNewsOutlet>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GNewsOutlet {
    #[serde(default)]
    name: Option<String>,
}

impl From<GNewsItem> for Article {
    fn from(item: GNewsItem) -> Self {
        Article {
            title: item.title,
            description: item.description.unwrap_or_default(),
            content: item.content.unwrap_or_default(),
            source: item
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            url: item.url.unwrap_or_default(),
            published_at: item.published_at.unwrap_or_default(),
            image: item.image.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// GNews client.
pub struct GNewsClient {
    http: Client,
    api_key: String,
}

impl GNewsClient {
    pub fn new(api_key: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent("kabar/0.1.0")
            .build()
            .context("Failed to build GNews HTTP client")?;
        Ok(Self { http, api_key })
    }
}

#[async_trait]
impl NewsSource for GNewsClient {
    async fn fetch<'a>(
        &self,
        query: &str,
        language: &str,
        region: Option<&'a str>,
        max_results: u32,
    ) -> Result<Vec<Article>> {
        let mut url = format!(
            "{BASE_URL}?q={}&lang={}&max={}&apikey={}",
            urlencoding::encode(query),
            language,
            max_results.min(MAX_PAGE_SIZE),
            self.api_key,
        );
        if let Some(country) = region {
            url.push_str(&format!("&country={country}"));
        }

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("GNews request failed")?;

        if !resp.status().is_success() {
            return Err(KabarError::Source {
                source_name: SOURCE_NAME.to_string(),
                message: format!("HTTP {}", resp.status()),
            }
            .into());
        }

        let data: GNewsResponse = resp
            .json()
            .await
            .context("Failed to parse GNews response")?;

        debug!(
            count = data.articles.len(),
            language,
            region = region.unwrap_or("-"),
            "GNews articles fetched"
        );
        Ok(data.articles.into_iter().map(Article::from).collect())
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
