//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Secrets (API keys) are referenced by env-var name in the config and
//! resolved at runtime via `std::env::var`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub sources: SourcesConfig,
    pub groups: GroupsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Result cap after deduplication.
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    /// Per-source call timeout.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Articles requested from each source per call.
    #[serde(default = "default_per_source_limit")]
    pub per_source_limit: u32,
}

fn default_max_articles() -> usize {
    100
}

fn default_fetch_timeout_secs() -> u64 {
    15
}

fn default_per_source_limit() -> u32 {
    50
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    pub newsdata: ProviderConfig,
    pub gnews: ProviderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub enabled: bool,
    pub api_key_env: String,
}

/// Ordered source bindings per scope group. Order matters: it is the
/// deduplication order.
#[derive(Debug, Deserialize, Clone)]
pub struct GroupsConfig {
    #[serde(default)]
    pub international: Vec<BindingConfig>,
    #[serde(default)]
    pub local: Vec<BindingConfig>,
}

/// One (source, language, region) call in a scope group.
#[derive(Debug, Deserialize, Clone)]
pub struct BindingConfig {
    pub source: String,
    pub language: String,
    #[serde(default)]
    pub region: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}
