use serde::Serialize;

use super::keywords::{FuzzyLevel, ProcessedKeywords};

/// Minimum token length for a word to emit its own match clause.
const MIN_MATCH_TOKEN_CHARS: usize = 2;

/// Column group a substring pattern applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchClause {
    /// Pattern tested against title, description and tag
    TitleDescriptionTag(String),
    /// Pattern tested against title and description
    TitleDescription(String),
    /// Pattern tested against title only
    TitleOnly(String),
}

impl MatchClause {
    pub fn pattern(&self) -> &str {
        match self {
            MatchClause::TitleDescriptionTag(p)
            | MatchClause::TitleDescription(p)
            | MatchClause::TitleOnly(p) => p,
        }
    }
}

/// Optional exact/range filters AND-ed with the match clause group.
/// Absent means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    pub country: Option<String>,
    pub status: Option<i32>,
    pub min_likes: Option<i32>,
    pub max_likes: Option<i32>,
}

impl SearchFilters {
    /// Coerce raw query-string values. Empty strings and malformed numbers
    /// silently become unconstrained rather than failing the request.
    pub fn from_params(
        country: Option<&str>,
        status: Option<&str>,
        min_likes: Option<&str>,
        max_likes: Option<&str>,
    ) -> Self {
        Self {
            country: country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            status: parse_numeric(status),
            min_likes: parse_numeric(min_likes),
            max_likes: parse_numeric(max_likes),
        }
    }
}

fn parse_numeric(value: Option<&str>) -> Option<i32> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Turn the query representation into the ordered, tiered list of
/// substring-match clauses. Clauses combine with OR; tiers contribute by
/// confidence:
///
/// 1. the full cleaned keyword over title/description/tag — always;
/// 2. each token of length >= 2 over title/description/tag — always;
/// 3. each synonym over title/description — at medium and high fuzziness;
/// 4. each variant over title only — at high fuzziness.
pub fn build_match_clauses(
    keywords: &ProcessedKeywords,
    fuzzy_level: FuzzyLevel,
) -> Vec<MatchClause> {
    let mut clauses = Vec::new();

    if !keywords.cleaned.is_empty() {
        clauses.push(MatchClause::TitleDescriptionTag(like_pattern(
            &keywords.cleaned,
        )));
    }

    for word in &keywords.words {
        if word.chars().count() >= MIN_MATCH_TOKEN_CHARS {
            clauses.push(MatchClause::TitleDescriptionTag(like_pattern(word)));
        }
    }

    if matches!(fuzzy_level, FuzzyLevel::Medium | FuzzyLevel::High) {
        for synonym in &keywords.synonyms {
            clauses.push(MatchClause::TitleDescription(like_pattern(synonym)));
        }
    }

    if fuzzy_level == FuzzyLevel::High {
        for variant in &keywords.variants {
            clauses.push(MatchClause::TitleOnly(like_pattern(variant)));
        }
    }

    clauses
}

fn like_pattern(value: &str) -> String {
    format!("%{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(raw: &str, level: FuzzyLevel) -> ProcessedKeywords {
        ProcessedKeywords::process(raw, level).unwrap()
    }

    #[test]
    fn test_full_keyword_clause_comes_first() {
        let kw = keywords("attack titan", FuzzyLevel::Low);
        let clauses = build_match_clauses(&kw, FuzzyLevel::Low);
        assert_eq!(
            clauses[0],
            MatchClause::TitleDescriptionTag("%attack titan%".to_string())
        );
    }

    #[test]
    fn test_token_clauses_follow_in_token_order() {
        let kw = keywords("attack titan", FuzzyLevel::Low);
        let clauses = build_match_clauses(&kw, FuzzyLevel::Low);
        assert_eq!(
            clauses[1..],
            [
                MatchClause::TitleDescriptionTag("%attack%".to_string()),
                MatchClause::TitleDescriptionTag("%titan%".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_tokens_emit_no_clause() {
        let kw = keywords("a titan", FuzzyLevel::Low);
        let clauses = build_match_clauses(&kw, FuzzyLevel::Low);
        assert!(!clauses.iter().any(|c| c.pattern() == "%a%"));
        assert!(clauses.iter().any(|c| c.pattern() == "%titan%"));
    }

    #[test]
    fn test_synonyms_gated_by_medium() {
        let kw = keywords("进击", FuzzyLevel::Medium);
        let low = build_match_clauses(&kw, FuzzyLevel::Low);
        assert!(!low
            .iter()
            .any(|c| matches!(c, MatchClause::TitleDescription(_))));

        let medium = build_match_clauses(&kw, FuzzyLevel::Medium);
        let synonym_patterns: Vec<&str> = medium
            .iter()
            .filter(|c| matches!(c, MatchClause::TitleDescription(_)))
            .map(|c| c.pattern())
            .collect();
        assert_eq!(synonym_patterns, ["%攻击%", "%进攻%"]);
    }

    #[test]
    fn test_variants_gated_by_high() {
        let kw = keywords("abcd", FuzzyLevel::High);
        let medium = build_match_clauses(&kw, FuzzyLevel::Medium);
        assert!(!medium.iter().any(|c| matches!(c, MatchClause::TitleOnly(_))));

        let high = build_match_clauses(&kw, FuzzyLevel::High);
        let variant_patterns: Vec<&str> = high
            .iter()
            .filter(|c| matches!(c, MatchClause::TitleOnly(_)))
            .map(|c| c.pattern())
            .collect();
        assert_eq!(
            variant_patterns,
            ["%abcd%", "%bcd%", "%cd%", "%ab%", "%abc%"]
        );
    }

    #[test]
    fn test_filters_coerce_malformed_values() {
        let filters = SearchFilters::from_params(Some(""), Some("abc"), Some("10"), None);
        assert_eq!(filters.country, None);
        assert_eq!(filters.status, None);
        assert_eq!(filters.min_likes, Some(10));
        assert_eq!(filters.max_likes, None);
    }

    #[test]
    fn test_filters_keep_valid_values() {
        let filters =
            SearchFilters::from_params(Some("japan"), Some("2"), Some("5"), Some("100"));
        assert_eq!(
            filters,
            SearchFilters {
                country: Some("japan".to_string()),
                status: Some(2),
                min_likes: Some(5),
                max_likes: Some(100),
            }
        );
    }
}
