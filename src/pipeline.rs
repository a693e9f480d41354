//! Pipeline entry point: aggregate → score → summarize.
//!
//! One call per query; no state survives between runs. The only
//! caller-visible "failure" under normal operation is an empty article
//! list with `summary: None`.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::aggregator::Aggregator;
use crate::config::AppConfig;
use crate::sentiment::SentimentScorer;
use crate::sources::SourceRegistry;
use crate::summary::SummaryBuilder;
use crate::types::{ScoredArticle, Scope, Summary};

/// Output of one pipeline run.
#[derive(Debug)]
pub struct PipelineRun {
    /// Scored articles in aggregation order.
    pub articles: Vec<ScoredArticle>,
    /// `None` when no articles were collected.
    pub summary: Option<Summary>,
    /// Non-fatal per-source failure notices.
    pub warnings: Vec<String>,
}

impl PipelineRun {
    /// Whether the run produced anything to show.
    pub fn has_results(&self) -> bool {
        self.summary.is_some()
    }
}

/// Query → aggregate → score → summarize, as one stateless unit.
pub struct Pipeline {
    aggregator: Aggregator,
    scorer: SentimentScorer,
}

impl Pipeline {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            scorer: SentimentScorer::new(),
        }
    }

    /// Wire the pipeline from configuration: build source clients, scope
    /// groups, and fetch limits.
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        let registry = SourceRegistry::from_config(cfg)?;
        let aggregator = Aggregator::new(registry).with_limits(
            Duration::from_secs(cfg.pipeline.fetch_timeout_secs),
            cfg.pipeline.per_source_limit,
        );
        Ok(Self::new(aggregator))
    }

    /// Run one query end to end.
    pub async fn run(&self, query: &str, scope: Scope, max_articles: usize) -> PipelineRun {
        let outcome = self.aggregator.aggregate(query, scope, max_articles).await;

        if outcome.articles.is_empty() {
            info!(query, "No articles collected");
            return PipelineRun {
                articles: Vec::new(),
                summary: None,
                warnings: outcome.warnings,
            };
        }

        let articles = self.scorer.analyze_batch(outcome.articles);
        let summary = SummaryBuilder::summarize(&articles);

        if let Some(s) = &summary {
            info!(
                total = s.total,
                trend = %s.overall_trend,
                avg_confidence = format!("{:.1}", s.avg_confidence),
                "Scoring complete"
            );
        }

        PipelineRun {
            articles,
            summary,
            warnings: outcome.warnings,
        }
    }
}
