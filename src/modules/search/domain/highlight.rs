use regex::RegexBuilder;
use serde::Serialize;

use super::keywords::ProcessedKeywords;

pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";
pub const TRUNCATION_MARKER: &str = "...";

/// Highlighted descriptions are cut to this many characters.
pub const DESCRIPTION_HIGHLIGHT_CHARS: usize = 100;

/// Which expanded terms hit the title and description of a row.
///
/// Containment here is case-sensitive and tests every term in `all`, not
/// just whichever predicate tier matched in the store.
#[derive(Debug, Clone, Serialize)]
pub struct MatchInfo {
    pub title_matches: Vec<String>,
    pub description_matches: Vec<String>,
    pub match_count: usize,
}

pub fn analyze_match(title: &str, description: &str, keywords: &ProcessedKeywords) -> MatchInfo {
    let mut title_matches = Vec::new();
    let mut description_matches = Vec::new();

    for term in &keywords.all {
        if title.contains(term.as_str()) {
            title_matches.push(term.clone());
        }
        if description.contains(term.as_str()) {
            description_matches.push(term.clone());
        }
    }

    let match_count = title_matches.len() + description_matches.len();
    MatchInfo {
        title_matches,
        description_matches,
        match_count,
    }
}

/// Wrap every case-insensitive occurrence of every term in highlight
/// markers, then optionally truncate to `max_chars` characters plus a
/// truncation marker.
///
/// Terms are applied sequentially, each over the already-highlighted text.
/// Terms that are substrings of one another can therefore nest markers
/// (e.g. a term matching inside an earlier wrap, or inside "mark" itself).
/// That is the long-standing behavior of this endpoint and callers render
/// it as-is; do not reorder or guard the replacement loop.
pub fn highlight_matches(text: &str, terms: &[String], max_chars: Option<usize>) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut highlighted = text.to_string();
    for term in terms {
        let Ok(re) = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        highlighted = re
            .replace_all(&highlighted, |caps: &regex::Captures| {
                format!("{}{}{}", HIGHLIGHT_OPEN, &caps[0], HIGHLIGHT_CLOSE)
            })
            .into_owned();
    }

    if let Some(max) = max_chars {
        let char_count = highlighted.chars().count();
        if char_count > max {
            highlighted = highlighted.chars().take(max).collect::<String>() + TRUNCATION_MARKER;
        }
    }

    highlighted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search::domain::keywords::FuzzyLevel;

    fn keywords(raw: &str) -> ProcessedKeywords {
        ProcessedKeywords::process(raw, FuzzyLevel::Medium).unwrap()
    }

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_analyze_match_counts_both_fields() {
        let kw = keywords("进击");
        let info = analyze_match("进击的巨人", "讲述进击与攻击的故事", &kw);
        assert_eq!(info.title_matches, vec!["进击"]);
        assert_eq!(info.description_matches, vec!["进击", "攻击"]);
        assert_eq!(info.match_count, 3);
    }

    #[test]
    fn test_analyze_match_tests_all_terms_independently() {
        let kw = keywords("进击");
        // Title only matched by a synonym; the store may have matched this
        // row on description, the analysis re-checks everything
        let info = analyze_match("攻击号", "", &kw);
        assert_eq!(info.title_matches, vec!["攻击"]);
        assert!(info.description_matches.is_empty());
    }

    #[test]
    fn test_analyze_match_is_case_sensitive() {
        let kw = keywords("titan");
        let info = analyze_match("TITAN", "", &kw);
        assert!(info.title_matches.is_empty());
    }

    #[test]
    fn test_highlight_wraps_matches_case_insensitively() {
        let out = highlight_matches("Attack on Titan", &terms(&["titan"]), None);
        assert_eq!(out, "Attack on <mark>Titan</mark>");
    }

    #[test]
    fn test_highlight_preserves_original_case() {
        let out = highlight_matches("TITAN titan Titan", &terms(&["titan"]), None);
        assert_eq!(
            out,
            "<mark>TITAN</mark> <mark>titan</mark> <mark>Titan</mark>"
        );
    }

    #[test]
    fn test_highlight_without_matches_is_identity() {
        let out = highlight_matches("One Piece", &terms(&["titan"]), None);
        assert_eq!(out, "One Piece");
    }

    #[test]
    fn test_highlight_empty_text() {
        assert_eq!(highlight_matches("", &terms(&["titan"]), None), "");
    }

    #[test]
    fn test_highlight_truncates_by_characters() {
        let text = "进".repeat(120);
        let out = highlight_matches(&text, &terms(&["击"]), Some(100));
        assert_eq!(out.chars().count(), 100 + TRUNCATION_MARKER.chars().count());
        assert!(out.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_highlight_under_cap_is_not_truncated() {
        let out = highlight_matches("short text", &terms(&[]), Some(100));
        assert_eq!(out, "short text");
    }

    #[test]
    fn test_truncation_counts_markup_characters() {
        // The cap applies to the highlighted string, markers included
        let text = "titan ".repeat(20);
        let out = highlight_matches(&text, &terms(&["titan"]), Some(100));
        assert_eq!(out.chars().count(), 100 + TRUNCATION_MARKER.chars().count());
    }

    #[test]
    fn test_overlapping_terms_nest_markers() {
        // Documented naive-sequential-replace behavior: the second term
        // matches inside the first term's wrap
        let out = highlight_matches("abcd", &terms(&["abcd", "bc"]), None);
        assert_eq!(out, "<mark>a<mark>bc</mark>d</mark>");
    }

    #[test]
    fn test_term_matching_marker_text_corrupts_markup() {
        // "ark" hits the marker tags themselves; pinned, not guarded
        let out = highlight_matches("dark", &terms(&["dark", "ark"]), None);
        assert_eq!(out, "<m<mark>ark</mark>>d<mark>ark</mark></m<mark>ark</mark>>");
    }
}
