//! Batch summary derivation.
//!
//! Reduces a batch of scored articles to counts, percentages, a coarse
//! trend label, and the mean confidence. An empty batch yields `None`
//! rather than a zero-filled summary; callers branch on it.

use crate::types::{ScoredArticle, Sentiment, Summary, Trend};

pub struct SummaryBuilder;

impl SummaryBuilder {
    /// Summarize a batch of scored articles. Returns `None` for an empty
    /// batch.
    ///
    /// Percentages and the confidence mean are left unrounded; per-article
    /// confidence was already rounded by the scorer.
    pub fn summarize(articles: &[ScoredArticle]) -> Option<Summary> {
        if articles.is_empty() {
            return None;
        }

        let total = articles.len();
        let positive_count = articles
            .iter()
            .filter(|a| a.sentiment == Sentiment::Positive)
            .count();
        let negative_count = articles
            .iter()
            .filter(|a| a.sentiment == Sentiment::Negative)
            .count();
        let neutral_count = total - positive_count - negative_count;

        let pct = |count: usize| count as f64 / total as f64 * 100.0;
        let positive_pct = pct(positive_count);
        let negative_pct = pct(negative_count);
        let neutral_pct = pct(neutral_count);

        let avg_confidence =
            articles.iter().map(|a| a.confidence).sum::<f64>() / total as f64;

        Some(Summary {
            total,
            positive_count,
            negative_count,
            neutral_count,
            positive_pct,
            negative_pct,
            neutral_pct,
            overall_trend: Trend::classify(positive_pct, negative_pct),
            avg_confidence,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
