//! kabar — multi-source news sentiment CLI.
//!
//! Entry point. Loads configuration, initialises structured logging,
//! runs one aggregate→score→summarize pipeline invocation, prints the
//! summary, and optionally writes CSV / text-report / JSON exports.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use tracing::{info, warn};

use kabar::config::AppConfig;
use kabar::export;
use kabar::pipeline::Pipeline;
use kabar::types::Scope;

#[derive(Debug, Parser)]
#[command(name = "kabar", about = "News sentiment analysis for crypto and stock tickers")]
struct Cli {
    /// Topic or ticker to analyze, e.g. "BTC Bitcoin" or "BBCA Bank BCA"
    topic: String,

    /// Which source groups to query
    #[arg(long, value_enum, default_value_t = Scope::Both)]
    scope: Scope,

    /// Maximum articles to keep after deduplication (defaults to config)
    #[arg(long)]
    max_articles: Option<usize>,

    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Write scored articles as CSV to this path
    #[arg(long)]
    csv: Option<String>,

    /// Write a plain-text report to this path
    #[arg(long)]
    report: Option<String>,

    /// Print scored articles and summary as JSON to stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    init_logging();

    let cfg = AppConfig::load(&cli.config)?;
    let max_articles = cli.max_articles.unwrap_or(cfg.pipeline.max_articles);

    info!(
        topic = %cli.topic,
        scope = %cli.scope,
        max_articles,
        "Starting analysis"
    );

    let pipeline = Pipeline::from_config(&cfg)?;
    let run = pipeline.run(&cli.topic, cli.scope, max_articles).await;

    for warning in &run.warnings {
        warn!(%warning, "Source degraded");
    }

    let Some(summary) = &run.summary else {
        println!("No results for '{}'", cli.topic);
        return Ok(());
    };

    if cli.json {
        let payload = serde_json::json!({
            "topic": cli.topic,
            "summary": summary,
            "articles": run.articles,
            "warnings": run.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{summary}");
        for (i, a) in run.articles.iter().enumerate() {
            println!(
                "{:>3}. [{}] {} ({}, {:.1}%)",
                i + 1,
                a.article.source,
                a.article.title,
                a.sentiment,
                a.confidence
            );
        }
    }

    if let Some(path) = &cli.csv {
        fs::write(path, export::to_csv(&run.articles))
            .with_context(|| format!("Failed to write CSV: {path}"))?;
        info!(%path, "CSV written");
    }

    if let Some(path) = &cli.report {
        fs::write(path, export::text_report(&cli.topic, summary))
            .with_context(|| format!("Failed to write report: {path}"))?;
        info!(%path, "Report written");
    }

    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kabar=info"));

    let json_logging = std::env::var("KABAR_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
