//! CLI output formatting utilities.

use crate::scoring::ScoredCandidate;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print one ranked video result.
    pub fn ranked_video(rank: usize, video: &ScoredCandidate) {
        println!(
            "\n{} {} {}",
            style(format!("{:2}.", rank)).bold(),
            style(&video.candidate.title).bold(),
            style(format!("({:.1} min)", video.candidate.duration_minutes)).dim()
        );
        println!(
            "    {} | {} views | final {:.3} | semantic {:.3}",
            video.candidate.channel,
            format_views(video.candidate.views),
            video.final_score,
            video.semantic_score
        );

        let mut tags = Vec::new();
        if video.is_animated {
            tags.push("animated");
        }
        if video.is_coding {
            tags.push("coding");
        }
        if !tags.is_empty() {
            println!("    [{}]", tags.join(", "));
        }

        println!("    {}", style(&video.candidate.url).dim());
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Format a view count with thousands separators.
fn format_views(views: u64) -> String {
    let digits: Vec<char> = views.to_string().chars().rev().collect();
    let mut out = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1_000), "1,000");
        assert_eq!(format_views(1_234_567), "1,234,567");
    }
}
