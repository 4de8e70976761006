//! Ranking orchestrator.
//!
//! Coordinates one ranking pass: embed the query context, fetch candidates
//! through the source chain, filter by duration (with one relaxation
//! retry), score every survivor, and return the sorted top-N.

use crate::config::Settings;
use crate::embedding::{cosine_similarity, Embedder, OpenAIEmbedder};
use crate::error::Result;
use crate::query::{truncate_chars, QueryContext};
use crate::scoring::{score_candidate, ScoredCandidate};
use crate::source::{Candidate, ScraperSource, SourceChain, VideoSource, YoutubeApiSource};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Maximum number of results returned from one ranking pass.
const TOP_N: usize = 10;

/// Lower duration bound applied on the first filter pass.
const MIN_DURATION_MINUTES: f64 = 2.0;

/// Upper duration bound for the relaxed retry pass. The 2-minute floor is
/// intentionally not re-applied here; very short clips come back in on
/// retry.
const RELAXED_MAX_MINUTES: f64 = 15.0;

/// Characters of description included in the candidate embedding text.
const DESCRIPTION_EMBED_CHARS: usize = 500;

/// The main ranking orchestrator.
pub struct Ranker {
    embedder: Arc<dyn Embedder>,
    chain: SourceChain,
    max_results: usize,
}

impl Ranker {
    /// Create a ranker from settings.
    ///
    /// The structured API source is only added when an API key is
    /// configured; the scraper fallback is always present.
    pub fn new(settings: &Settings) -> Result<Self> {
        let timeout = Duration::from_secs(settings.search.timeout_seconds);

        let mut sources: Vec<Box<dyn VideoSource>> = Vec::new();

        match settings.youtube.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => {
                sources.push(Box::new(YoutubeApiSource::new(
                    key,
                    &settings.youtube.relevance_language,
                    timeout,
                )?));
            }
            None => {
                info!("No YouTube API key configured, using scraper fallback only");
            }
        }
        sources.push(Box::new(ScraperSource::new(timeout)?));

        let embedder = Arc::new(OpenAIEmbedder::with_config(
            &settings.embedding.model,
            settings.embedding.dimensions as usize,
        ));

        Ok(Self {
            embedder,
            chain: SourceChain::new(sources),
            max_results: settings.search.max_results,
        })
    }

    /// Create a ranker with injected components.
    pub fn with_components(
        embedder: Arc<dyn Embedder>,
        chain: SourceChain,
        max_results: usize,
    ) -> Self {
        Self {
            embedder,
            chain,
            max_results,
        }
    }

    /// Run one ranking pass for a query context.
    ///
    /// Returns an empty list when no candidate survives both filter
    /// passes; that is a normal outcome, not an error.
    #[instrument(skip(self, ctx), fields(query = %ctx.query))]
    pub async fn rank(&self, ctx: &QueryContext) -> Result<Vec<ScoredCandidate>> {
        let semantic_context = ctx.semantic_context();
        debug!(
            "Embedding query context: '{}'",
            truncate_chars(&semantic_context, 100)
        );
        let query_embedding = self.embedder.embed(&semantic_context).await?;

        let search_query = ctx.search_query();
        info!("Searching videos: '{}'", search_query);

        let raw = self.chain.search(&search_query, self.max_results).await;
        let mut candidates: Vec<Candidate> = raw
            .into_iter()
            .filter(|c| {
                c.duration_minutes >= MIN_DURATION_MINUTES
                    && c.duration_minutes <= ctx.max_duration_minutes
            })
            .collect();

        if candidates.is_empty() {
            info!(
                "No candidates under {} minutes, relaxing to {} minutes",
                ctx.max_duration_minutes, RELAXED_MAX_MINUTES
            );
            let raw = self.chain.search(&search_query, self.max_results).await;
            candidates = raw
                .into_iter()
                .filter(|c| c.duration_minutes <= RELAXED_MAX_MINUTES)
                .collect();
        }

        if candidates.is_empty() {
            info!("No candidates found");
            return Ok(Vec::new());
        }

        debug!("Scoring {} candidates", candidates.len());

        let texts: Vec<String> = candidates
            .iter()
            .map(|c| {
                format!(
                    "{} {}",
                    c.title,
                    truncate_chars(&c.description, DESCRIPTION_EMBED_CHARS)
                )
            })
            .collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .zip(embeddings.iter())
            .map(|(candidate, embedding)| {
                let semantic = cosine_similarity(&query_embedding, embedding) as f64;
                score_candidate(candidate, semantic, ctx.prefer_animated, ctx.prefer_coding)
            })
            .collect();

        // Stable sort keeps retrieval order on ties.
        scored.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(TOP_N);

        if let Some(best) = scored.first() {
            info!(
                title = %truncate_chars(&best.candidate.title, 60),
                duration_minutes = best.candidate.duration_minutes,
                views = best.candidate.views,
                semantic_score = best.semantic_score,
                final_score = best.final_score,
                animated = best.is_animated,
                coding = best.is_coding,
                "Top match"
            );
        }

        Ok(scored)
    }

    /// Run a ranking pass, absorbing any error into a structured response.
    pub async fn rank_response(&self, ctx: &QueryContext) -> RankResponse {
        match self.rank(ctx).await {
            Ok(videos) => RankResponse {
                success: true,
                count: videos.len(),
                videos,
                error: None,
            },
            Err(e) => {
                error!("Ranking failed: {}", e);
                RankResponse {
                    success: false,
                    count: 0,
                    videos: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Boundary response for one ranking call.
#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub success: bool,
    pub count: usize,
    pub videos: Vec<ScoredCandidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
