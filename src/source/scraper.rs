//! Unauthenticated results-page fallback source.
//!
//! Fetches the public YouTube results page and parses the embedded
//! `ytInitialData` JSON blob. No credential needed, but only approximate
//! fields are available: duration comes as a colon timestamp, likes and
//! comments are not reported and default to 0, and the publish timestamp is
//! left empty.

use super::{parse_timestamp, Candidate, VideoSource};
use crate::error::{Result, VidrankError};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

const RESULTS_URL: &str = "https://www.youtube.com/results";

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0 Safari/537.36";

/// Scraper-based search backend.
pub struct ScraperSource {
    client: reqwest::Client,
    initial_data_regex: Regex,
}

impl ScraperSource {
    /// Create a new scraper source.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| VidrankError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let initial_data_regex = Regex::new(r"(?s)var ytInitialData\s*=\s*(\{.+?\});</script>")
            .expect("Invalid regex");

        Ok(Self {
            client,
            initial_data_regex,
        })
    }

    /// Extract the `ytInitialData` JSON payload from the page HTML.
    fn extract_initial_data(&self, html: &str) -> Result<Value> {
        let caps = self.initial_data_regex.captures(html).ok_or_else(|| {
            VidrankError::Search("ytInitialData not found in results page".to_string())
        })?;

        let json = serde_json::from_str(&caps[1])
            .map_err(|e| VidrankError::Search(format!("Failed to parse ytInitialData: {}", e)))?;

        Ok(json)
    }

    /// Walk the result sections and collect `videoRenderer` entries.
    fn parse_candidates(&self, data: &Value, max_results: usize) -> Vec<Candidate> {
        let sections = data["contents"]["twoColumnSearchResultsRenderer"]["primaryContents"]
            ["sectionListRenderer"]["contents"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut candidates = Vec::new();

        for section in &sections {
            let items = match section["itemSectionRenderer"]["contents"].as_array() {
                Some(items) => items,
                None => continue,
            };

            for item in items {
                let renderer = &item["videoRenderer"];
                if renderer.is_null() {
                    continue;
                }
                if let Some(candidate) = parse_video_renderer(renderer) {
                    candidates.push(candidate);
                    if candidates.len() >= max_results {
                        return candidates;
                    }
                }
            }
        }

        candidates
    }
}

#[async_trait]
impl VideoSource for ScraperSource {
    fn name(&self) -> &'static str {
        "scraper"
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Candidate>> {
        let html = self
            .client
            .get(RESULTS_URL)
            .query(&[("search_query", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let data = self.extract_initial_data(&html)?;
        let candidates = self.parse_candidates(&data, max_results);

        debug!("Scraper parsed {} candidates", candidates.len());
        Ok(candidates)
    }
}

/// Build a candidate from one `videoRenderer` entry.
fn parse_video_renderer(renderer: &Value) -> Option<Candidate> {
    let id = renderer["videoId"].as_str()?.to_string();

    let title = runs_text(&renderer["title"]);
    let description = runs_text(&renderer["detailedMetadataSnippets"][0]["snippetText"]);
    let channel = runs_text(&renderer["ownerText"]);

    let duration = renderer["lengthText"]["simpleText"]
        .as_str()
        .unwrap_or("")
        .to_string();
    let duration_minutes = parse_timestamp(&duration);

    let views = renderer["viewCountText"]["simpleText"]
        .as_str()
        .map(parse_view_count)
        .unwrap_or(0);

    let thumbnail = renderer["thumbnail"]["thumbnails"]
        .as_array()
        .and_then(|t| t.last())
        .and_then(|t| t["url"].as_str())
        .unwrap_or("")
        .to_string();

    Some(Candidate {
        url: format!("https://www.youtube.com/watch?v={}", id),
        id,
        title,
        description,
        thumbnail,
        channel,
        published_at: String::new(),
        duration,
        duration_minutes,
        views,
        likes: 0,
        comments: 0,
    })
}

/// Join the `runs[].text` fragments of a text node, falling back to
/// `simpleText`.
fn runs_text(node: &Value) -> String {
    if let Some(runs) = node["runs"].as_array() {
        return runs
            .iter()
            .filter_map(|r| r["text"].as_str())
            .collect::<Vec<_>>()
            .join("");
    }
    node["simpleText"].as_str().unwrap_or("").to_string()
}

/// Parse a display view count like "1,234,567 views" to an integer.
fn parse_view_count(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
