//! Composite scoring for candidate videos.
//!
//! Each candidate gets seven sub-scores (semantic relevance plus six
//! heuristic quality signals) which combine into one final ranking score:
//!
//! `0.40*semantic + 0.15*views + 0.15*engagement + 0.10*recency +
//! 0.10*duration + content_type_bonus + channel_bonus`
//!
//! The two bonuses are flat additive amounts rather than capped weight
//! shares, so the final score is not bounded to [0, 1]. Ranking only
//! compares scores against each other, so the sum stays unnormalized.

use crate::classify;
use crate::source::Candidate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback age in days when the publish timestamp is missing or unparsable.
const DEFAULT_AGE_DAYS: i64 = 365;

/// Channels known to produce consistently high-quality explainers.
/// Matched as case-insensitive substrings of the channel name.
const QUALITY_CHANNELS: &[&str] = &[
    "3blue1brown",
    "khan academy",
    "crash course",
    "freecodecamp",
    "traversy media",
    "fireship",
    "academind",
    "net ninja",
    "programming with mosh",
    "corey schafer",
    "tech with tim",
    "sentdex",
    "computerphile",
    "numberphile",
];

/// The seven named sub-scores, each rounded to 3 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubScores {
    pub semantic: f64,
    pub views: f64,
    pub engagement: f64,
    pub recency: f64,
    pub duration: f64,
    pub content_type_bonus: f64,
    pub channel_bonus: f64,
}

/// A candidate with its scores, held in memory for one ranking pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Cosine similarity to the query context, in [-1, 1], 4 decimals.
    pub semantic_score: f64,
    /// Weighted composite score, 4 decimals.
    pub final_score: f64,
    pub is_animated: bool,
    pub is_coding: bool,
    pub scores: SubScores,
}

/// Score a candidate given its precomputed semantic similarity.
pub fn score_candidate(
    candidate: &Candidate,
    semantic_score: f64,
    prefer_animated: bool,
    prefer_coding: bool,
) -> ScoredCandidate {
    let days = days_since_published(&candidate.published_at);

    let views = views_score(candidate.views);
    let engagement = engagement_score(candidate.views, candidate.likes, days);
    let recency = recency_score(days);
    let duration = duration_score(candidate.duration_minutes);

    let is_animated = classify::is_animated(&candidate.title, &candidate.description);
    let is_coding = classify::is_coding(&candidate.title, &candidate.description);

    let content_type_bonus = if prefer_animated && is_animated {
        0.15
    } else if prefer_coding && is_coding {
        0.15
    } else {
        0.0
    };

    let channel_bonus = channel_bonus(&candidate.channel);

    let final_score = semantic_score * 0.40
        + views * 0.15
        + engagement * 0.15
        + recency * 0.10
        + duration * 0.10
        + content_type_bonus
        + channel_bonus;

    ScoredCandidate {
        candidate: candidate.clone(),
        semantic_score: round_to(semantic_score, 4),
        final_score: round_to(final_score, 4),
        is_animated,
        is_coding,
        scores: SubScores {
            semantic: round_to(semantic_score, 3),
            views: round_to(views, 3),
            engagement: round_to(engagement, 3),
            recency: round_to(recency, 3),
            duration: round_to(duration, 3),
            content_type_bonus: round_to(content_type_bonus, 3),
            channel_bonus: round_to(channel_bonus, 3),
        },
    }
}

/// Days since publication, at least 1. Missing or unparsable timestamps
/// default to one year.
pub fn days_since_published(published_at: &str) -> i64 {
    if published_at.is_empty() {
        return DEFAULT_AGE_DAYS;
    }

    match DateTime::parse_from_rfc3339(published_at) {
        Ok(published) => Utc::now()
            .signed_duration_since(published)
            .num_days()
            .max(1),
        Err(_) => DEFAULT_AGE_DAYS,
    }
}

/// Popularity score: 1M views saturates to 1.0.
pub fn views_score(views: u64) -> f64 {
    (views as f64 / 1_000_000.0).min(1.0)
}

/// Engagement score from view velocity and like ratio.
///
/// 10k views/day saturates the view component; 50 likes per 1k views
/// saturates the like component.
pub fn engagement_score(views: u64, likes: u64, days_since_published: i64) -> f64 {
    let days = days_since_published.max(1) as f64;
    let views_per_day = views as f64 / days;

    let like_ratio = if views > 0 {
        likes as f64 / views as f64 * 1000.0
    } else {
        0.0
    };

    let view_component = (views_per_day / 10_000.0).min(1.0);
    let like_component = (like_ratio / 50.0).min(1.0);

    view_component * 0.7 + like_component * 0.3
}

/// Recency score: full for videos under two years old, then linear decay
/// over five years, floored at 0.3.
pub fn recency_score(days_since_published: i64) -> f64 {
    if days_since_published < 730 {
        1.0
    } else {
        (1.0 - (days_since_published - 730) as f64 / 1825.0).max(0.3)
    }
}

/// Duration-band score. Tightest matching band wins: 5-10 minutes is ideal,
/// 3-12 close, 2-15 acceptable, anything else penalized.
pub fn duration_score(minutes: f64) -> f64 {
    if (5.0..=10.0).contains(&minutes) {
        1.0
    } else if (3.0..=12.0).contains(&minutes) {
        0.9
    } else if (2.0..=15.0).contains(&minutes) {
        0.7
    } else {
        0.5
    }
}

/// Flat 0.1 bonus for known high-quality channels.
fn channel_bonus(channel: &str) -> f64 {
    let channel = channel.to_lowercase();
    if QUALITY_CHANNELS.iter().any(|c| channel.contains(c)) {
        0.1
    } else {
        0.0
    }
}

/// Round to a fixed number of decimal places.
fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(views: u64, likes: u64, duration_minutes: f64) -> Candidate {
        Candidate {
            id: "v1".to_string(),
            title: "Plain lecture".to_string(),
            channel: "Some Channel".to_string(),
            views,
            likes,
            duration_minutes,
            ..Default::default()
        }
    }

    #[test]
    fn test_views_score_bounds() {
        assert_eq!(views_score(0), 0.0);
        assert_eq!(views_score(500_000), 0.5);
        assert_eq!(views_score(1_000_000), 1.0);
        assert_eq!(views_score(50_000_000), 1.0);
    }

    #[test]
    fn test_engagement_score_bounds() {
        // Zero views: both components zero.
        assert_eq!(engagement_score(0, 0, 100), 0.0);

        // Saturated on both components.
        let score = engagement_score(10_000_000, 1_000_000, 10);
        assert!((score - 1.0).abs() < 1e-9);

        // Always within [0, 1].
        let score = engagement_score(123_456, 7_890, 42);
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_engagement_like_ratio_zero_views() {
        // Likes without views must not divide by zero.
        assert_eq!(engagement_score(0, 100, 10), 0.0);
    }

    #[test]
    fn test_recency_score_boundaries() {
        assert_eq!(recency_score(1), 1.0);
        assert_eq!(recency_score(729), 1.0);
        assert!(recency_score(731) < 1.0);
        assert_eq!(recency_score(2555), 0.3);
        assert_eq!(recency_score(10_000), 0.3);
    }

    #[test]
    fn test_recency_strict_threshold() {
        // 730 is the first day outside the "recent" window.
        assert_eq!(recency_score(730), 1.0);
        let day_after = recency_score(731);
        assert!(day_after < 1.0 && day_after > 0.99);
    }

    #[test]
    fn test_duration_bands() {
        assert_eq!(duration_score(7.0), 1.0);
        assert_eq!(duration_score(5.0), 1.0);
        assert_eq!(duration_score(10.0), 1.0);
        assert_eq!(duration_score(4.0), 0.9);
        assert_eq!(duration_score(12.0), 0.9);
        assert_eq!(duration_score(13.0), 0.7);
        assert_eq!(duration_score(2.0), 0.7);
        assert_eq!(duration_score(20.0), 0.5);
        assert_eq!(duration_score(0.5), 0.5);
    }

    #[test]
    fn test_days_since_published_defaults() {
        assert_eq!(days_since_published(""), 365);
        assert_eq!(days_since_published("not-a-date"), 365);
    }

    #[test]
    fn test_days_since_published_recent() {
        let yesterday = (Utc::now() - chrono::Duration::days(5)).to_rfc3339();
        assert_eq!(days_since_published(&yesterday), 5);

        // Future timestamps clamp to 1.
        let future = (Utc::now() + chrono::Duration::days(5)).to_rfc3339();
        assert_eq!(days_since_published(&future), 1);
    }

    #[test]
    fn test_channel_bonus_case_insensitive() {
        assert_eq!(channel_bonus("3Blue1Brown Official"), 0.1);
        assert_eq!(channel_bonus("FREECODECAMP"), 0.1);
        assert_eq!(channel_bonus("Random Channel"), 0.0);
    }

    #[test]
    fn test_content_type_bonus_requires_preference() {
        let mut c = candidate(1000, 10, 7.0);
        c.title = "Sorting Explained with Animation".to_string();

        let preferred = score_candidate(&c, 0.5, true, false);
        assert!(preferred.is_animated);
        assert_eq!(preferred.scores.content_type_bonus, 0.15);

        let not_preferred = score_candidate(&c, 0.5, false, false);
        assert_eq!(not_preferred.scores.content_type_bonus, 0.0);
    }

    #[test]
    fn test_coding_bonus_only_without_animated_match() {
        let mut c = candidate(1000, 10, 7.0);
        c.title = "Build a compiler tutorial".to_string();

        let scored = score_candidate(&c, 0.5, false, true);
        assert!(scored.is_coding);
        assert_eq!(scored.scores.content_type_bonus, 0.15);
    }

    #[test]
    fn test_final_score_weighted_sum() {
        let mut c = candidate(1_000_000, 0, 7.0);
        c.published_at = String::new(); // 365 days -> recency 1.0

        let scored = score_candidate(&c, 0.5, false, false);

        // views=1.0, recency=1.0, duration=1.0,
        // engagement = 0.7*min((1e6/365)/1e4, 1) = 0.7*0.27397...
        let engagement = 0.7 * (1_000_000.0 / 365.0 / 10_000.0);
        let expected = 0.5 * 0.40 + 1.0 * 0.15 + engagement * 0.15 + 1.0 * 0.10 + 1.0 * 0.10;
        assert!((scored.final_score - round(expected)).abs() < 1e-9);
        assert_eq!(scored.semantic_score, 0.5);
    }

    #[test]
    fn test_final_score_can_exceed_one() {
        let mut c = candidate(50_000_000, 5_000_000, 7.0);
        c.title = "Animated guide".to_string();
        c.channel = "3blue1brown".to_string();
        c.published_at = (Utc::now() - chrono::Duration::days(30)).to_rfc3339();

        let scored = score_candidate(&c, 0.99, true, false);
        assert!(scored.final_score > 1.0);
    }

    #[test]
    fn test_sub_scores_rounded() {
        let c = candidate(123_456, 789, 7.0);
        let scored = score_candidate(&c, 0.123456, false, false);

        assert_eq!(scored.semantic_score, 0.1235);
        assert_eq!(scored.scores.semantic, 0.123);
    }

    fn round(v: f64) -> f64 {
        (v * 10_000.0).round() / 10_000.0
    }
}
