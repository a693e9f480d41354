//! Multi-source article aggregation.
//!
//! Fans out one query to every source binding in the requested scope,
//! merges the per-source results in configured binding order, deduplicates
//! by trimmed title, and truncates to the caller's cap. A failing or
//! timing-out source degrades to an empty result and a warning; it never
//! aborts the run.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::sources::SourceRegistry;
use crate::types::{Article, Scope};

/// Default per-source call timeout.
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Default maximum articles requested from each source.
const DEFAULT_PER_SOURCE_LIMIT: u32 = 50;

/// Result of one aggregation run.
#[derive(Debug, Default)]
pub struct AggregateOutcome {
    /// Unique articles in deterministic source-call order, at most `cap`.
    pub articles: Vec<Article>,
    /// Non-fatal per-source failure notices, each naming the source.
    pub warnings: Vec<String>,
}

/// Fans out to configured news sources and merges their results.
pub struct Aggregator {
    registry: SourceRegistry,
    fetch_timeout: Duration,
    per_source_limit: u32,
}

impl Aggregator {
    pub fn new(registry: SourceRegistry) -> Self {
        Self {
            registry,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            per_source_limit: DEFAULT_PER_SOURCE_LIMIT,
        }
    }

    pub fn with_limits(mut self, fetch_timeout: Duration, per_source_limit: u32) -> Self {
        self.fetch_timeout = fetch_timeout;
        self.per_source_limit = per_source_limit;
        self
    }

    /// Collect up to `cap` unique articles for `query` from the sources in
    /// `scope`.
    ///
    /// Source calls run concurrently, each bounded by the fetch timeout,
    /// but results are re-assembled in configured binding order before
    /// deduplication so the first-occurrence-wins rule is deterministic
    /// regardless of completion order.
    pub async fn aggregate(&self, query: &str, scope: Scope, cap: usize) -> AggregateOutcome {
        let bindings = self.registry.bindings_for(scope);
        info!(query, %scope, sources = bindings.len(), "Aggregating news");

        let fetches = bindings.iter().map(|binding| async move {
            let call = binding.source.fetch(
                query,
                &binding.language,
                binding.region.as_deref(),
                self.per_source_limit,
            );
            match tokio::time::timeout(self.fetch_timeout, call).await {
                Ok(Ok(articles)) => {
                    debug!(source = %binding.label(), count = articles.len(), "Source returned");
                    (articles, None)
                }
                Ok(Err(e)) => {
                    warn!(source = %binding.label(), error = %e, "Source failed, continuing without");
                    (Vec::new(), Some(format!("{}: {e:#}", binding.label())))
                }
                Err(_) => {
                    warn!(
                        source = %binding.label(),
                        timeout_secs = self.fetch_timeout.as_secs(),
                        "Source timed out, continuing without"
                    );
                    (
                        Vec::new(),
                        Some(format!(
                            "{}: timed out after {}s",
                            binding.label(),
                            self.fetch_timeout.as_secs()
                        )),
                    )
                }
            }
        });

        // join_all yields results in input order, which is binding order.
        let results = futures::future::join_all(fetches).await;

        let mut warnings = Vec::new();
        let mut merged = Vec::new();
        for (articles, warning) in results {
            merged.extend(articles);
            warnings.extend(warning);
        }
        let fetched = merged.len();

        let mut articles = dedup_by_title(merged);
        let unique = articles.len();
        articles.truncate(cap);

        info!(
            fetched,
            unique,
            kept = articles.len(),
            warnings = warnings.len(),
            "Aggregation complete"
        );

        AggregateOutcome { articles, warnings }
    }
}

/// Drop articles with empty titles and keep the first occurrence of each
/// trimmed title. Titles are compared exactly (case-sensitive) after
/// trimming whitespace.
fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for article in articles {
        let title = article.title.trim();
        if title.is_empty() {
            continue;
        }
        if seen.insert(title.to_string()) {
            unique.push(article);
        }
    }

    unique
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
