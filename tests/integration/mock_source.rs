//! Mock news source for integration testing.
//!
//! Provides a deterministic `NewsSource` implementation that returns
//! known articles and records the queries it receives — all in-memory
//! with no external dependencies.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use kabar::sources::NewsSource;
use kabar::types::Article;

/// A call received by a mock source.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub query: String,
    pub language: String,
    pub region: Option<String>,
    pub max_results: u32,
}

/// A deterministic in-memory news source.
pub struct MockSource {
    name: String,
    articles: Vec<Article>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    /// If set, fetch returns this error.
    force_error: Arc<Mutex<Option<String>>>,
}

impl MockSource {
    pub fn new(name: &str, articles: Vec<Article>) -> Self {
        Self {
            name: name.to_string(),
            articles,
            calls: Arc::new(Mutex::new(Vec::new())),
            force_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Force subsequent fetches to return an error.
    pub fn set_error(&self, msg: &str) {
        *self.force_error.lock().unwrap() = Some(msg.to_string());
    }

    /// Queries received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSource for MockSource {
    async fn fetch<'a>(
        &self,
        query: &str,
        language: &str,
        region: Option<&'a str>,
        max_results: u32,
    ) -> Result<Vec<Article>> {
        self.calls.lock().unwrap().push(RecordedCall {
            query: query.to_string(),
            language: language.to_string(),
            region: region.map(String::from),
            max_results,
        });

        if let Some(err) = self.force_error.lock().unwrap().as_ref() {
            return Err(anyhow!("{}", err));
        }
        Ok(self.articles.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build a raw article with the given title and provider-visible source.
pub fn article(title: &str, source: &str) -> Article {
    Article {
        title: title.to_string(),
        description: String::new(),
        content: String::new(),
        source: source.to_string(),
        url: format!("https://example.com/{}", title.replace(' ', "-")),
        published_at: "2026-08-29T10:00:00Z".to_string(),
        image: String::new(),
    }
}

/// Build an article whose description carries the sentiment signal.
pub fn article_with_text(title: &str, source: &str, description: &str) -> Article {
    Article {
        description: description.to_string(),
        ..article(title, source)
    }
}
