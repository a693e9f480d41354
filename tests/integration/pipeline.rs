//! End-to-end pipeline tests: aggregation, scoring, summary, export —
//! all against in-memory mock sources.

use std::sync::Arc;

use kabar::aggregator::Aggregator;
use kabar::export;
use kabar::pipeline::Pipeline;
use kabar::sources::{SourceBinding, SourceRegistry};
use kabar::summary::SummaryBuilder;
use kabar::types::{Scope, Sentiment, Trend};

use crate::mock_source::{article, article_with_text, MockSource};

fn binding(source: &Arc<MockSource>, language: &str, region: Option<&str>) -> SourceBinding {
    SourceBinding {
        source: source.clone(),
        language: language.to_string(),
        region: region.map(String::from),
    }
}

#[tokio::test]
async fn test_full_run_scores_and_summarizes() {
    let intl = Arc::new(MockSource::new(
        "newsdata",
        vec![
            article_with_text("Bitcoin surges to record", "newsdata", "strong gains and a rally"),
            article_with_text("Exchange hit by crisis", "newsdata", "prices drop and fall"),
        ],
    ));
    let local = Arc::new(MockSource::new(
        "gnews",
        vec![article_with_text("Harga BTC naik", "gnews", "pasar optimis dan menguat")],
    ));

    let registry = SourceRegistry {
        international: vec![binding(&intl, "en", None)],
        local: vec![binding(&local, "id", Some("id"))],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    let run = pipeline.run("BTC", Scope::Both, 100).await;

    assert!(run.has_results());
    assert_eq!(run.articles.len(), 3);
    assert!(run.warnings.is_empty());

    // International group first, then local
    assert_eq!(run.articles[0].article.title, "Bitcoin surges to record");
    assert_eq!(run.articles[0].sentiment, Sentiment::Positive);
    assert_eq!(run.articles[1].sentiment, Sentiment::Negative);
    assert_eq!(run.articles[2].article.title, "Harga BTC naik");
    assert_eq!(run.articles[2].sentiment, Sentiment::Positive);

    let summary = run.summary.unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.positive_count, 2);
    assert_eq!(summary.negative_count, 1);
    assert_eq!(summary.neutral_count, 0);
    // 66.7% vs 33.3% → diff > 15 → very positive
    assert_eq!(summary.overall_trend, Trend::VeryPositive);
}

#[tokio::test]
async fn test_scope_selects_source_groups() {
    let intl = Arc::new(MockSource::new("intl", vec![article("Intl story", "intl")]));
    let local = Arc::new(MockSource::new("local", vec![article("Local story", "local")]));

    let registry = SourceRegistry {
        international: vec![binding(&intl, "en", None)],
        local: vec![binding(&local, "id", Some("id"))],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    let run = pipeline.run("TLKM", Scope::Local, 100).await;

    assert_eq!(run.articles.len(), 1);
    assert_eq!(run.articles[0].article.title, "Local story");
    assert!(intl.calls().is_empty(), "international source must not be queried");
    assert_eq!(local.calls().len(), 1);
}

#[tokio::test]
async fn test_language_and_region_passed_through() {
    let local = Arc::new(MockSource::new("gnews", vec![article("Berita", "gnews")]));

    let registry = SourceRegistry {
        international: vec![],
        local: vec![binding(&local, "id", Some("id"))],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    pipeline.run("ANTM Aneka Tambang", Scope::Local, 50).await;

    let calls = local.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query, "ANTM Aneka Tambang");
    assert_eq!(calls[0].language, "id");
    assert_eq!(calls[0].region.as_deref(), Some("id"));
}

#[tokio::test]
async fn test_failing_source_does_not_abort_run() {
    let dead = Arc::new(MockSource::new("deadapi", vec![article("Never seen", "deadapi")]));
    dead.set_error("HTTP 429 Too Many Requests");
    let alive = Arc::new(MockSource::new("alive", vec![article("Survivor", "alive")]));

    let registry = SourceRegistry {
        international: vec![binding(&dead, "en", None), binding(&alive, "en", None)],
        local: vec![],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    let run = pipeline.run("BTC", Scope::International, 100).await;

    assert!(run.has_results());
    assert_eq!(run.articles.len(), 1);
    assert_eq!(run.articles[0].article.title, "Survivor");
    assert_eq!(run.warnings.len(), 1);
    assert!(run.warnings[0].contains("deadapi"));
}

#[tokio::test]
async fn test_all_sources_failing_yields_no_results() {
    let a = Arc::new(MockSource::new("a", vec![article("x", "a")]));
    let b = Arc::new(MockSource::new("b", vec![article("y", "b")]));
    a.set_error("timeout");
    b.set_error("bad payload");

    let registry = SourceRegistry {
        international: vec![binding(&a, "en", None)],
        local: vec![binding(&b, "id", None)],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    let run = pipeline.run("XRP", Scope::Both, 100).await;

    assert!(!run.has_results());
    assert!(run.articles.is_empty());
    assert!(run.summary.is_none());
    assert_eq!(run.warnings.len(), 2);
}

#[tokio::test]
async fn test_cross_source_dedup_first_wins() {
    // Same headline syndicated to both groups — the international copy wins
    let intl = Arc::new(MockSource::new(
        "intl",
        vec![article("Shared headline", "intl-outlet")],
    ));
    let local = Arc::new(MockSource::new(
        "local",
        vec![article("Shared headline", "local-outlet"), article("Unique", "local-outlet")],
    ));

    let registry = SourceRegistry {
        international: vec![binding(&intl, "en", None)],
        local: vec![binding(&local, "id", None)],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    let run = pipeline.run("BTC", Scope::Both, 100).await;

    assert_eq!(run.articles.len(), 2);
    assert_eq!(run.articles[0].article.source, "intl-outlet");
}

#[tokio::test]
async fn test_max_articles_caps_results() {
    let articles: Vec<_> = (1..=12).map(|i| article(&format!("Story {i}"), "a")).collect();
    let source = Arc::new(MockSource::new("a", articles));

    let registry = SourceRegistry {
        international: vec![binding(&source, "en", None)],
        local: vec![],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    let run = pipeline.run("BTC", Scope::International, 5).await;

    assert_eq!(run.articles.len(), 5);
    assert_eq!(run.articles[0].article.title, "Story 1");
    assert_eq!(run.articles[4].article.title, "Story 5");
    assert_eq!(run.summary.unwrap().total, 5);
}

#[tokio::test]
async fn test_export_consumes_pipeline_output() {
    let source = Arc::new(MockSource::new(
        "newsdata",
        vec![article_with_text("BTC surges", "newsdata", "gain and rise")],
    ));

    let registry = SourceRegistry {
        international: vec![binding(&source, "en", None)],
        local: vec![],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    let run = pipeline.run("BTC", Scope::International, 10).await;
    let summary = run.summary.as_ref().unwrap();

    let csv = export::to_csv(&run.articles);
    assert!(csv.starts_with("Title,Description,Source,Sentiment,Confidence,URL"));
    assert!(csv.contains("BTC surges"));
    assert!(csv.contains("positive,100.0"));

    let report = export::text_report("BTC", summary);
    assert!(report.contains("Topic: BTC"));
    assert!(report.contains("- Total: 1"));
}

#[tokio::test]
async fn test_summary_matches_rebuild_from_articles() {
    // The summary returned by the pipeline must equal one rebuilt from its
    // own scored articles — no hidden state between stages.
    let source = Arc::new(MockSource::new(
        "a",
        vec![
            article_with_text("Up day", "a", "surge gain"),
            article_with_text("Down day", "a", "crash plunge"),
            article_with_text("Flat day", "a", "sideways trading session"),
        ],
    ));

    let registry = SourceRegistry {
        international: vec![binding(&source, "en", None)],
        local: vec![],
    };
    let pipeline = Pipeline::new(Aggregator::new(registry));

    let run = pipeline.run("BTC", Scope::International, 100).await;
    let summary = run.summary.unwrap();
    let rebuilt = SummaryBuilder::summarize(&run.articles).unwrap();

    assert_eq!(summary.total, rebuilt.total);
    assert_eq!(summary.positive_count, rebuilt.positive_count);
    assert_eq!(summary.negative_count, rebuilt.negative_count);
    assert_eq!(summary.overall_trend, rebuilt.overall_trend);
    assert!((summary.avg_confidence - rebuilt.avg_confidence).abs() < 1e-9);
}
