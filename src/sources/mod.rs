//! News source integrations.
//!
//! Defines the `NewsSource` trait and provides implementations for:
//! - NewsData.io — free tier, 200 requests/day
//! - GNews — free tier, 100 requests/day
//!
//! Sources are wired into scope groups (international / local) through
//! [`SourceRegistry`]; the aggregator fans out over the bindings of the
//! requested scope without knowing which concrete providers exist.

pub mod gnews;
pub mod newsdata;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::config::AppConfig;
use crate::types::{Article, KabarError, Scope};

/// Abstraction over external news providers.
///
/// Implementors return raw articles for a query in a given language and
/// optional region. Errors crossing this boundary are caught by the
/// aggregator and degraded to an empty result for that source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch up to `max_results` articles matching `query`.
    async fn fetch<'a>(
        &self,
        query: &str,
        language: &str,
        region: Option<&'a str>,
        max_results: u32,
    ) -> Result<Vec<Article>>;

    /// Source name for logging and identification.
    fn name(&self) -> &str;
}

/// One configured (source, language, region) call the aggregator makes.
#[derive(Clone)]
pub struct SourceBinding {
    pub source: Arc<dyn NewsSource>,
    pub language: String,
    pub region: Option<String>,
}

impl SourceBinding {
    /// Human-readable identity for warnings and logs.
    pub fn label(&self) -> String {
        format!("{} ({})", self.source.name(), self.language)
    }
}

/// Ordered source bindings per scope group.
///
/// Binding order is the deduplication order: first occurrence of a title
/// wins, so the configured order is part of the observable behaviour.
#[derive(Clone, Default)]
pub struct SourceRegistry {
    pub international: Vec<SourceBinding>,
    pub local: Vec<SourceBinding>,
}

impl SourceRegistry {
    /// Bindings to query for a scope, in deterministic call order.
    /// For `Both`, the international group comes before the local group.
    pub fn bindings_for(&self, scope: Scope) -> Vec<&SourceBinding> {
        match scope {
            Scope::International => self.international.iter().collect(),
            Scope::Local => self.local.iter().collect(),
            Scope::Both => self.international.iter().chain(self.local.iter()).collect(),
        }
    }

    /// Build the registry from configuration.
    ///
    /// Each enabled provider is constructed once and shared across its
    /// bindings. A provider whose API key env var is unset is skipped with
    /// a warning rather than failing startup; referencing an unknown source
    /// name in a group is a configuration error.
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        let newsdata = if cfg.sources.newsdata.enabled {
            match std::env::var(&cfg.sources.newsdata.api_key_env) {
                Ok(key) => Some(Arc::new(newsdata::NewsDataClient::new(key)?)),
                Err(_) => {
                    warn!(
                        env = %cfg.sources.newsdata.api_key_env,
                        "NewsData.io API key not set, skipping its bindings"
                    );
                    None
                }
            }
        } else {
            None
        };

        let gnews = if cfg.sources.gnews.enabled {
            match std::env::var(&cfg.sources.gnews.api_key_env) {
                Ok(key) => Some(Arc::new(gnews::GNewsClient::new(key)?)),
                Err(_) => {
                    warn!(
                        env = %cfg.sources.gnews.api_key_env,
                        "GNews API key not set, skipping its bindings"
                    );
                    None
                }
            }
        } else {
            None
        };

        let resolve = |group: &[crate::config::BindingConfig]| -> Result<Vec<SourceBinding>> {
            let mut bindings = Vec::new();
            for b in group {
                let source: Option<Arc<dyn NewsSource>> = match b.source.as_str() {
                    "newsdata" => newsdata.clone().map(|c| c as Arc<dyn NewsSource>),
                    "gnews" => gnews.clone().map(|c| c as Arc<dyn NewsSource>),
                    other => {
                        return Err(KabarError::Config(format!(
                            "unknown news source in group config: {other}"
                        ))
                        .into())
                    }
                };
                if let Some(source) = source {
                    bindings.push(SourceBinding {
                        source,
                        language: b.language.clone(),
                        region: b.region.clone(),
                    });
                }
            }
            Ok(bindings)
        };

        Ok(Self {
            international: resolve(&cfg.groups.international)?,
            local: resolve(&cfg.groups.local)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
