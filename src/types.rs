//! Shared types for the kabar pipeline.
//!
//! These types form the data model used across all modules.
//! They are designed to be stable so that source, scoring, and
//! aggregation modules can depend on them without circular references.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Article
// ---------------------------------------------------------------------------

/// A raw news article as returned by a news source.
///
/// Providers frequently omit fields; everything except `title` and `source`
/// defaults to an empty string rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    /// Source identifier, e.g. "newsdata" source_id or GNews outlet name.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub image: String,
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.source, self.title)
    }
}

// ---------------------------------------------------------------------------
// Scored article
// ---------------------------------------------------------------------------

/// Sentiment classification of a single article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Lexicon terms that matched an article, at most five per polarity,
/// in lexicon scan order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordMatches {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// An [`Article`] augmented with its sentiment classification.
/// Created once by the scorer and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: Article,
    pub sentiment: Sentiment,
    /// Classification strength, 0.0–100.0, rounded to one decimal.
    pub confidence: f64,
    pub keywords: KeywordMatches,
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Coarse five-way trend label derived from the gap between positive and
/// negative percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl Trend {
    /// Classify from per-sentiment percentages.
    ///
    /// The ±15 bounds are checked before the ±5 bounds; the thresholds are
    /// load-bearing for downstream consumers and must not drift.
    pub fn classify(positive_pct: f64, negative_pct: f64) -> Self {
        let diff = positive_pct - negative_pct;
        if diff > 15.0 {
            Trend::VeryPositive
        } else if diff > 5.0 {
            Trend::Positive
        } else if diff < -15.0 {
            Trend::VeryNegative
        } else if diff < -5.0 {
            Trend::Negative
        } else {
            Trend::Neutral
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::VeryPositive => write!(f, "very positive"),
            Trend::Positive => write!(f, "positive"),
            Trend::Neutral => write!(f, "neutral"),
            Trend::Negative => write!(f, "negative"),
            Trend::VeryNegative => write!(f, "very negative"),
        }
    }
}

/// Aggregate sentiment over one batch of scored articles.
///
/// Recomputed fresh per query; percentages and the confidence average are
/// intentionally left unrounded — presentation decides how to format them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    pub overall_trend: Trend,
    pub avg_confidence: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} articles: {} positive ({:.1}%) | {} negative ({:.1}%) | {} neutral ({:.1}%) | trend: {} | avg confidence: {:.1}%",
            self.total,
            self.positive_count,
            self.positive_pct,
            self.negative_count,
            self.negative_pct,
            self.neutral_count,
            self.neutral_pct,
            self.overall_trend,
            self.avg_confidence,
        )
    }
}

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// Which source groups a query fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    International,
    Local,
    Both,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::International => write!(f, "international"),
            Scope::Local => write!(f, "local"),
            Scope::Both => write!(f, "both"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for kabar.
#[derive(Debug, thiserror::Error)]
pub enum KabarError {
    #[error("Source error ({source_name}): {message}")]
    Source { source_name: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
