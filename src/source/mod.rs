//! Candidate video sources.
//!
//! Provides a trait-based interface over heterogeneous video search
//! backends, normalized into one candidate schema. Sources are arranged in
//! an ordered fallback chain: the structured Data API first, the
//! unauthenticated scraper second.

mod scraper;
mod youtube_api;

pub use scraper::ScraperSource;
pub use youtube_api::YoutubeApiSource;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One retrieved video, before scoring.
///
/// All optional upstream fields default to empty/zero so a missing field
/// can never fail a scoring pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    /// Video identifier.
    pub id: String,
    /// Canonical watch URL.
    pub url: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Channel name.
    pub channel: String,
    /// Publish timestamp (RFC 3339), or empty when unknown.
    pub published_at: String,
    /// Raw duration string as reported by the source.
    pub duration: String,
    /// Duration in minutes, derived uniformly from either source format.
    pub duration_minutes: f64,
    /// View count.
    pub views: u64,
    /// Like count (0 when the source does not report it).
    pub likes: u64,
    /// Comment count (0 when the source does not report it).
    pub comments: u64,
}

/// Trait for video search backends.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Search for videos matching a textual query.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Candidate>>;
}

/// Ordered fallback chain over video sources.
///
/// Tries each source in turn until one yields a non-empty result. A source
/// error is logged and treated as zero candidates from that source.
pub struct SourceChain {
    sources: Vec<Box<dyn VideoSource>>,
}

impl SourceChain {
    /// Create a chain from an ordered list of sources.
    pub fn new(sources: Vec<Box<dyn VideoSource>>) -> Self {
        Self { sources }
    }

    /// Search the chain, returning the first non-empty result.
    ///
    /// Returns an empty list when every source fails or comes back empty.
    pub async fn search(&self, query: &str, max_results: usize) -> Vec<Candidate> {
        for source in &self.sources {
            match source.search(query, max_results).await {
                Ok(candidates) if !candidates.is_empty() => {
                    debug!(
                        "Source '{}' returned {} candidates",
                        source.name(),
                        candidates.len()
                    );
                    return candidates;
                }
                Ok(_) => {
                    debug!("Source '{}' returned no candidates", source.name());
                }
                Err(e) => {
                    warn!("Source '{}' failed: {}", source.name(), e);
                }
            }
        }

        Vec::new()
    }
}

/// Parse an ISO 8601 duration ("PT1H5M30S") to minutes, rounded to one
/// decimal. Missing components count as zero; malformed input yields 0.
pub fn parse_iso8601_duration(duration: &str) -> f64 {
    if duration.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    let mut value = String::new();

    for c in duration.chars() {
        if c.is_ascii_digit() {
            value.push(c);
            continue;
        }
        let parsed: f64 = match value.parse() {
            Ok(v) => v,
            Err(_) => {
                value.clear();
                continue;
            }
        };
        match c {
            'H' => total += parsed * 60.0,
            'M' => total += parsed,
            'S' => total += parsed / 60.0,
            _ => {}
        }
        value.clear();
    }

    (total * 10.0).round() / 10.0
}

/// Parse a colon-separated timestamp ("5:30" or "1:02:15") to minutes.
///
/// Two parts are minutes:seconds; three parts are hours:minutes:seconds.
/// Malformed input silently yields 0.
pub fn parse_timestamp(timestamp: &str) -> f64 {
    let parts: Vec<Option<f64>> = timestamp
        .split(':')
        .map(|p| p.trim().parse::<f64>().ok())
        .collect();

    match parts.as_slice() {
        [Some(m), Some(s)] => m + s / 60.0,
        [Some(h), Some(m), Some(s)] => h * 60.0 + m + s / 60.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso8601_minutes_seconds() {
        assert_eq!(parse_iso8601_duration("PT10M30S"), 10.5);
    }

    #[test]
    fn test_parse_iso8601_hours_minutes() {
        assert_eq!(parse_iso8601_duration("PT1H5M"), 65.0);
    }

    #[test]
    fn test_parse_iso8601_single_components() {
        assert_eq!(parse_iso8601_duration("PT45S"), 0.8);
        assert_eq!(parse_iso8601_duration("PT2H"), 120.0);
        assert_eq!(parse_iso8601_duration("PT7M"), 7.0);
    }

    #[test]
    fn test_parse_iso8601_malformed() {
        assert_eq!(parse_iso8601_duration(""), 0.0);
        assert_eq!(parse_iso8601_duration("garbage"), 0.0);
    }

    #[test]
    fn test_parse_timestamp_two_parts() {
        assert_eq!(parse_timestamp("5:30"), 5.5);
    }

    #[test]
    fn test_parse_timestamp_three_parts() {
        assert_eq!(parse_timestamp("1:02:15"), 62.25);
    }

    #[test]
    fn test_parse_timestamp_malformed() {
        assert_eq!(parse_timestamp(""), 0.0);
        assert_eq!(parse_timestamp("5"), 0.0);
        assert_eq!(parse_timestamp("a:b"), 0.0);
        assert_eq!(parse_timestamp("1:2:3:4"), 0.0);
    }

    #[test]
    fn test_candidate_defaults() {
        let candidate: Candidate = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(candidate.id, "abc");
        assert_eq!(candidate.views, 0);
        assert_eq!(candidate.duration_minutes, 0.0);
        assert!(candidate.published_at.is_empty());
    }

    struct EmptySource;
    struct FixedSource;
    struct FailingSource;

    #[async_trait]
    impl VideoSource for EmptySource {
        fn name(&self) -> &'static str {
            "empty"
        }
        async fn search(&self, _query: &str, _max: usize) -> Result<Vec<Candidate>> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl VideoSource for FixedSource {
        fn name(&self) -> &'static str {
            "fixed"
        }
        async fn search(&self, _query: &str, _max: usize) -> Result<Vec<Candidate>> {
            Ok(vec![Candidate {
                id: "v1".to_string(),
                ..Default::default()
            }])
        }
    }

    #[async_trait]
    impl VideoSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }
        async fn search(&self, _query: &str, _max: usize) -> Result<Vec<Candidate>> {
            Err(crate::error::VidrankError::Search("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_chain_falls_through_empty_source() {
        let chain = SourceChain::new(vec![Box::new(EmptySource), Box::new(FixedSource)]);
        let results = chain.search("q", 30).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "v1");
    }

    #[tokio::test]
    async fn test_chain_absorbs_source_errors() {
        let chain = SourceChain::new(vec![Box::new(FailingSource), Box::new(FixedSource)]);
        let results = chain.search("q", 30).await;
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_chain_all_exhausted() {
        let chain = SourceChain::new(vec![Box::new(FailingSource), Box::new(EmptySource)]);
        let results = chain.search("q", 30).await;
        assert!(results.is_empty());
    }
}
