//! kabar — multi-source news sentiment aggregation.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod lexicon;
pub mod sentiment;
pub mod sources;
pub mod aggregator;
pub mod summary;
pub mod pipeline;
pub mod export;
