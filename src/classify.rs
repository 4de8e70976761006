//! Keyword-based content classification.
//!
//! Lightweight predicates flagging whether a candidate looks animated/visual
//! or coding/tutorial in nature. Plain case-insensitive substring matching
//! over title and description; no word-boundary enforcement ("3d" matches
//! inside longer words too).

/// Keywords indicating animated or visual content.
const ANIMATED_KEYWORDS: &[&str] = &[
    "animated",
    "animation",
    "visual",
    "illustrated",
    "explained",
    "3d",
    "graphics",
    "diagram",
    "visualization",
    "infographic",
    "whiteboard",
    "drawing",
    "sketch",
    "motion graphics",
];

/// Keywords indicating coding or implementation content.
const CODING_KEYWORDS: &[&str] = &[
    "code",
    "coding",
    "programming",
    "tutorial",
    "build",
    "project",
    "implementation",
    "hands-on",
    "walkthrough",
    "step by step",
    "from scratch",
    "complete guide",
];

/// Detect if a video is animated/visual content.
pub fn is_animated(title: &str, description: &str) -> bool {
    let text = format!("{} {}", title, description).to_lowercase();
    ANIMATED_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Detect if a video is coding/implementation content.
pub fn is_coding(title: &str, description: &str) -> bool {
    let text = format!("{} {}", title, description).to_lowercase();
    CODING_KEYWORDS.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animated_in_title() {
        assert!(is_animated("Sorting Explained Visually", ""));
        assert!(is_animated("An ANIMATED guide", ""));
    }

    #[test]
    fn test_animated_in_description() {
        assert!(is_animated("Sorting", "with whiteboard diagrams"));
    }

    #[test]
    fn test_animated_substring_match() {
        // Substrings count, even inside other words.
        assert!(is_animated("b3data analysis", ""));
        assert!(is_animated("", "visuals included"));
    }

    #[test]
    fn test_not_animated() {
        assert!(!is_animated("Lecture recording", "raw classroom audio"));
    }

    #[test]
    fn test_coding_keywords() {
        assert!(is_coding("Build a web server", ""));
        assert!(is_coding("", "step by step walkthrough"));
        assert!(is_coding("Rust From Scratch", ""));
        assert!(!is_coding("Nature documentary", "wildlife footage"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_coding("COMPLETE GUIDE to Python", ""));
        assert!(is_animated("Motion Graphics reel", ""));
    }
}
