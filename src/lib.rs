//! Vidrank - Semantic Video Ranking
//!
//! Ranks candidate videos against a contextual query by combining
//! sentence-embedding similarity with heuristic quality signals
//! (popularity, engagement, recency, duration fit, content-type match,
//! channel reputation) into one composite score.
//!
//! # Overview
//!
//! Vidrank allows you to:
//! - Search for videos via the YouTube Data API, with an unauthenticated
//!   scraper fallback when no API key is configured
//! - Score every candidate against the query context with a weighted blend
//!   of semantic and quality signals
//! - Get back a sorted top-10 list with per-signal score breakdowns
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `embedding` - Embedding generation and cosine similarity
//! - `query` - Query context and search-query building
//! - `source` - Candidate video sources (API + scraper fallback chain)
//! - `classify` - Keyword-based content classification
//! - `scoring` - Composite scoring model
//! - `ranker` - Ranking orchestration
//!
//! # Example
//!
//! ```rust,no_run
//! use vidrank::config::Settings;
//! use vidrank::query::QueryContext;
//! use vidrank::ranker::Ranker;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let ranker = Ranker::new(&settings)?;
//!
//!     let ctx = QueryContext::new("sorting algorithms");
//!     let results = ranker.rank(&ctx).await?;
//!     println!("Top result: {:?}", results.first().map(|r| &r.candidate.title));
//!
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod openai;
pub mod query;
pub mod ranker;
pub mod scoring;
pub mod source;

pub use error::{Result, VidrankError};
