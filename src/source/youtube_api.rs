//! Structured YouTube Data API v3 source.
//!
//! Two-step search: a text search constrained to embeddable, safe,
//! medium-length videos returns IDs; a batched details call then fetches
//! statistics and the exact ISO 8601 duration.

use super::{parse_iso8601_duration, Candidate, VideoSource};
use crate::error::{Result, VidrankError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

/// YouTube Data API v3 search backend.
pub struct YoutubeApiSource {
    client: reqwest::Client,
    api_key: String,
    relevance_language: String,
}

impl YoutubeApiSource {
    /// Create a new API source. Requires a Data API key.
    pub fn new(api_key: &str, relevance_language: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VidrankError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            relevance_language: relevance_language.to_string(),
        })
    }

    /// Issue the text search and collect matching video IDs.
    async fn search_ids(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let max_results = max_results.to_string();
        let response: SearchResponse = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("part", "id,snippet"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("type", "video"),
                ("relevanceLanguage", self.relevance_language.as_str()),
                ("safeSearch", "strict"),
                ("videoEmbeddable", "true"),
                // Medium means 4-20 minutes.
                ("videoDuration", "medium"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    /// Fetch snippet, duration, and statistics for a batch of IDs.
    async fn fetch_details(&self, ids: &[String]) -> Result<Vec<Candidate>> {
        let id_list = ids.join(",");
        let response: VideosResponse = self
            .client
            .get(VIDEOS_URL)
            .query(&[
                ("part", "snippet,contentDetails,statistics"),
                ("id", id_list.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let candidates = response
            .items
            .into_iter()
            .map(|item| {
                let duration_minutes = parse_iso8601_duration(&item.content_details.duration);
                let thumbnail = item
                    .snippet
                    .thumbnails
                    .high
                    .map(|t| t.url)
                    .unwrap_or_default();

                Candidate {
                    url: format!("https://www.youtube.com/watch?v={}", item.id),
                    id: item.id,
                    title: item.snippet.title,
                    description: item.snippet.description,
                    thumbnail,
                    channel: item.snippet.channel_title,
                    published_at: item.snippet.published_at,
                    duration: item.content_details.duration,
                    duration_minutes,
                    views: parse_count(&item.statistics.view_count),
                    likes: parse_count(&item.statistics.like_count),
                    comments: parse_count(&item.statistics.comment_count),
                }
            })
            .collect();

        Ok(candidates)
    }
}

#[async_trait]
impl VideoSource for YoutubeApiSource {
    fn name(&self) -> &'static str {
        "youtube-api"
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Candidate>> {
        let ids = self.search_ids(query, max_results).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Fetching details for {} videos", ids.len());
        self.fetch_details(&ids).await
    }
}

/// Parse a numeric count reported as a string, defaulting to 0.
fn parse_count(count: &Option<String>) -> u64 {
    count
        .as_deref()
        .and_then(|c| c.parse().ok())
        .unwrap_or(0)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    snippet: Snippet,
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}
