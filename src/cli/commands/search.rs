//! Search command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::query::QueryContext;
use crate::ranker::Ranker;
use anyhow::Result;

/// Run the search command.
pub async fn run_search(
    query: &str,
    selected_text: Option<String>,
    transcript: Option<String>,
    prefer_animated: bool,
    prefer_coding: bool,
    max_duration: f64,
    language: &str,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let ranker = Ranker::new(&settings)?;

    let ctx = QueryContext {
        query: query.to_string(),
        selected_text,
        transcript_segment: transcript,
        prefer_animated,
        prefer_coding,
        max_duration_minutes: max_duration,
        language: language.to_string(),
    };

    let spinner = Output::spinner("Searching and ranking...");
    let response = ranker.rank_response(&ctx).await;
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if !response.success {
        let message = response.error.unwrap_or_else(|| "unknown error".to_string());
        Output::error(&format!("Search failed: {}", message));
        return Err(anyhow::anyhow!("{}", message));
    }

    if response.videos.is_empty() {
        Output::warning("No videos found matching your query.");
        return Ok(());
    }

    Output::success(&format!("Found {} videos", response.count));
    for (i, video) in response.videos.iter().enumerate() {
        Output::ranked_video(i + 1, video);
    }

    Ok(())
}
