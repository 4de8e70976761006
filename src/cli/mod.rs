//! CLI module for vidrank.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Vidrank - Semantic Video Ranking
///
/// Searches for videos matching a contextual query and ranks them by
/// combining semantic similarity with quality signals.
#[derive(Parser, Debug)]
#[command(name = "vidrank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and rank videos for a query
    Search {
        /// The search query
        query: String,

        /// Selected text to use as additional context
        #[arg(long)]
        selected_text: Option<String>,

        /// Transcript snippet to use as additional context
        #[arg(long)]
        transcript: Option<String>,

        /// Boost coding tutorials instead of animated content
        #[arg(long)]
        coding: bool,

        /// Disable the default boost for animated/visual content
        #[arg(long)]
        no_animated: bool,

        /// Maximum video duration in minutes
        #[arg(long, default_value_t = 10.0)]
        max_duration: f64,

        /// Preferred language hint (english, hindi)
        #[arg(long, default_value = "english")]
        language: String,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the active configuration
    Show,
    /// Write a default configuration file
    Init,
    /// Print the configuration file path
    Path,
}
