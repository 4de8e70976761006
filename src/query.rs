//! Query context for a single ranking request.

use serde::{Deserialize, Serialize};

/// Maximum characters taken from each context snippet.
const SNIPPET_CHAR_LIMIT: usize = 300;

/// Maximum length of the outbound search query.
const SEARCH_QUERY_CHAR_LIMIT: usize = 150;

/// Immutable input for one ranking request.
///
/// Combines the raw query with optional context snippets and preference
/// flags. The context feeds the semantic embedding; the preferences shape
/// the outbound search query and the content-type bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryContext {
    /// User's search query.
    pub query: String,
    /// Text selected by the user (context).
    pub selected_text: Option<String>,
    /// Transcript snippet from the video region (context).
    pub transcript_segment: Option<String>,
    /// Boost animated/visual content.
    pub prefer_animated: bool,
    /// Boost coding tutorials.
    pub prefer_coding: bool,
    /// Maximum video duration in minutes.
    pub max_duration_minutes: f64,
    /// Preferred language hint.
    pub language: String,
}

impl QueryContext {
    /// Create a context with default preferences for a query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selected_text: None,
            transcript_segment: None,
            prefer_animated: true,
            prefer_coding: false,
            max_duration_minutes: 10.0,
            language: "english".to_string(),
        }
    }

    /// Build the semantic-context string that gets embedded once per search.
    ///
    /// Query plus up to 300 characters of each snippet, joined with " | ".
    pub fn semantic_context(&self) -> String {
        let mut parts = vec![self.query.clone()];

        if let Some(text) = self.selected_text.as_deref().filter(|t| !t.is_empty()) {
            parts.push(truncate_chars(text, SNIPPET_CHAR_LIMIT).to_string());
        }
        if let Some(text) = self
            .transcript_segment
            .as_deref()
            .filter(|t| !t.is_empty())
        {
            parts.push(truncate_chars(text, SNIPPET_CHAR_LIMIT).to_string());
        }

        parts.join(" | ")
    }

    /// Build the outbound search-query string.
    ///
    /// Query plus a preference boost phrase and a language hint, truncated
    /// to 150 characters.
    pub fn search_query(&self) -> String {
        let mut parts = vec![self.query.clone()];

        if self.prefer_animated {
            parts.push("animated explanation visual".to_string());
        } else if self.prefer_coding {
            parts.push("coding tutorial implementation".to_string());
        }

        if self.language.to_lowercase() == "hindi" {
            parts.push("hindi".to_string());
        } else {
            parts.push("english".to_string());
        }

        truncate_chars(&parts.join(" "), SEARCH_QUERY_CHAR_LIMIT).to_string()
    }
}

/// Truncate a string to at most `limit` characters, respecting char
/// boundaries.
pub(crate) fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_context_query_only() {
        let ctx = QueryContext::new("sorting algorithms");
        assert_eq!(ctx.semantic_context(), "sorting algorithms");
    }

    #[test]
    fn test_semantic_context_joins_snippets() {
        let mut ctx = QueryContext::new("sorting algorithms");
        ctx.selected_text = Some("quick sort pivot".to_string());
        ctx.transcript_segment = Some("we partition the array".to_string());

        assert_eq!(
            ctx.semantic_context(),
            "sorting algorithms | quick sort pivot | we partition the array"
        );
    }

    #[test]
    fn test_semantic_context_caps_snippets() {
        let mut ctx = QueryContext::new("q");
        ctx.selected_text = Some("a".repeat(500));

        let context = ctx.semantic_context();
        assert_eq!(context, format!("q | {}", "a".repeat(300)));
    }

    #[test]
    fn test_semantic_context_skips_empty_snippets() {
        let mut ctx = QueryContext::new("q");
        ctx.selected_text = Some(String::new());
        assert_eq!(ctx.semantic_context(), "q");
    }

    #[test]
    fn test_search_query_animated_boost() {
        let ctx = QueryContext::new("binary trees");
        assert_eq!(
            ctx.search_query(),
            "binary trees animated explanation visual english"
        );
    }

    #[test]
    fn test_search_query_coding_boost() {
        let mut ctx = QueryContext::new("binary trees");
        ctx.prefer_animated = false;
        ctx.prefer_coding = true;
        assert_eq!(
            ctx.search_query(),
            "binary trees coding tutorial implementation english"
        );
    }

    #[test]
    fn test_search_query_language_hint() {
        let mut ctx = QueryContext::new("binary trees");
        ctx.prefer_animated = false;
        ctx.language = "Hindi".to_string();
        assert_eq!(ctx.search_query(), "binary trees hindi");
    }

    #[test]
    fn test_search_query_truncated() {
        let ctx = QueryContext::new("x".repeat(200));
        assert_eq!(ctx.search_query().chars().count(), 150);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let s = "héllo wörld";
        assert_eq!(truncate_chars(s, 4), "héll");
        assert_eq!(truncate_chars(s, 100), s);
    }
}
