//! Keyword-based sentiment scoring.
//!
//! Classifies a text blob into positive/negative/neutral by counting which
//! lexicon terms appear in it. Matching is case-insensitive substring
//! containment — "up" matches inside "upward". That imprecision is a known,
//! deliberate property of the lexicon approach and is kept for behavioural
//! compatibility; it lives behind [`TermMatcher`] so a word-boundary
//! strategy could be swapped in without touching the scoring math.

use crate::lexicon::Lexicon;
use crate::types::{Article, KeywordMatches, ScoredArticle, Sentiment};

/// Maximum matched terms reported per polarity.
const MAX_REPORTED_KEYWORDS: usize = 5;

// ---------------------------------------------------------------------------
// Matching strategy
// ---------------------------------------------------------------------------

/// Decides whether a lexicon term is present in a lowercased text.
pub trait TermMatcher: Send + Sync {
    fn matches(&self, term: &str, text_lower: &str) -> bool;
}

/// Substring containment: the term may appear anywhere in the text,
/// including inside a larger word.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatch;

impl TermMatcher for SubstringMatch {
    fn matches(&self, term: &str, text_lower: &str) -> bool {
        text_lower.contains(term)
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Result of scoring a single text blob.
#[derive(Debug, Clone)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    /// 0.0–100.0, rounded to one decimal.
    pub confidence: f64,
    pub keywords: KeywordMatches,
}

impl SentimentScore {
    fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
            keywords: KeywordMatches::default(),
        }
    }
}

/// Lexicon-based sentiment scorer. Stateless across calls; `analyze` is
/// total and deterministic.
pub struct SentimentScorer {
    lexicon: Lexicon,
    matcher: Box<dyn TermMatcher>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
            matcher: Box::new(SubstringMatch),
        }
    }

    /// Build a scorer with a non-default matching strategy.
    pub fn with_matcher(matcher: Box<dyn TermMatcher>) -> Self {
        Self {
            lexicon: Lexicon::new(),
            matcher,
        }
    }

    /// Score one text blob.
    ///
    /// Each distinct lexicon term counts at most once no matter how often it
    /// occurs (or how many sublists list it). Equal positive and negative
    /// counts above zero are a tie: neutral with confidence pinned at 50,
    /// not the 100·P/(P+N) ratio used for decided outcomes.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::neutral();
        }

        let text_lower = text.to_lowercase();

        let positive_matches = self.collect_matches(self.lexicon.positive(), &text_lower);
        let negative_matches = self.collect_matches(self.lexicon.negative(), &text_lower);

        let p = positive_matches.len();
        let n = negative_matches.len();
        let total = p + n;

        let (sentiment, confidence) = if total == 0 {
            (Sentiment::Neutral, 0.0)
        } else if p > n {
            (Sentiment::Positive, round1(p as f64 / total as f64 * 100.0))
        } else if n > p {
            (Sentiment::Negative, round1(n as f64 / total as f64 * 100.0))
        } else {
            (Sentiment::Neutral, 50.0)
        };

        let keywords = KeywordMatches {
            positive: truncate_terms(positive_matches),
            negative: truncate_terms(negative_matches),
        };

        SentimentScore {
            sentiment,
            confidence,
            keywords,
        }
    }

    /// Score a batch of articles, preserving input order and all raw fields.
    ///
    /// Title, description, and content are joined with single spaces into
    /// one blob per article; missing fields are already empty strings.
    pub fn analyze_batch(&self, articles: Vec<Article>) -> Vec<ScoredArticle> {
        articles
            .into_iter()
            .map(|article| {
                let text = format!(
                    "{} {} {}",
                    article.title, article.description, article.content
                );
                let score = self.analyze(&text);
                ScoredArticle {
                    article,
                    sentiment: score.sentiment,
                    confidence: score.confidence,
                    keywords: score.keywords,
                }
            })
            .collect()
    }

    /// Collect distinct matching terms in lexicon scan order.
    fn collect_matches(
        &self,
        terms: impl Iterator<Item = &'static str>,
        text_lower: &str,
    ) -> Vec<&'static str> {
        let mut found: Vec<&'static str> = Vec::new();
        for term in terms {
            if !found.contains(&term) && self.matcher.matches(term, text_lower) {
                found.push(term);
            }
        }
        found
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn truncate_terms(terms: Vec<&'static str>) -> Vec<String> {
    terms
        .into_iter()
        .take(MAX_REPORTED_KEYWORDS)
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
