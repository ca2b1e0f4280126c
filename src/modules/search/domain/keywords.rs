use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// How aggressively a query is expanded beyond literal substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FuzzyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl FuzzyLevel {
    /// Parse a raw query-string value. Unrecognised values fall back to the
    /// default rather than failing the request.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("low") => FuzzyLevel::Low,
            Some("medium") => FuzzyLevel::Medium,
            Some("high") => FuzzyLevel::High,
            _ => FuzzyLevel::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FuzzyLevel::Low => "low",
            FuzzyLevel::Medium => "medium",
            FuzzyLevel::High => "high",
        }
    }
}

/// Canonical term -> synonym group, fixed at compile time.
///
/// A group fires when its key occurs anywhere in the cleaned keyword; several
/// groups may fire for one query.
const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("动漫", &["动画", "番剧", "动画片"]),
    ("动画", &["动漫", "番剧"]),
    ("番剧", &["动漫", "动画"]),
    ("电影", &["剧场版", "电影版"]),
    ("剧场版", &["电影", "电影版"]),
    ("进击", &["攻击", "进攻"]),
    ("巨人", &["泰坦", "TITAN"]),
    ("鬼灭", &["鬼杀"]),
    ("火影", &["忍者"]),
    ("海贼", &["海盗"]),
    ("龙珠", &["七龙珠"]),
    ("死神", &["漂白剂", "BLEACH"]),
];

/// Variants are only generated for cleaned keywords of at most this many
/// characters; the suffix/prefix fan-out is O(n) strings of O(n) length.
pub const MAX_VARIANT_KEYWORD_CHARS: usize = 64;

const MIN_VARIANT_KEYWORD_CHARS: usize = 3;

/// A raw keyword expanded into the weighted query representation used for
/// matching, ranking and highlighting. Rebuilt per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedKeywords {
    pub original: String,
    pub cleaned: String,
    pub words: Vec<String>,
    pub synonyms: Vec<String>,
    pub variants: Vec<String>,
    /// First-seen-ordered union of words, synonyms and variants.
    pub all: Vec<String>,
}

impl ProcessedKeywords {
    /// Clean, tokenize and expand a raw keyword.
    ///
    /// Fails when the keyword is blank, or when cleaning removes every
    /// character (an all-punctuation keyword cannot emit any predicate).
    pub fn process(raw_keyword: &str, fuzzy_level: FuzzyLevel) -> AppResult<Self> {
        let original = raw_keyword.trim();
        if original.is_empty() {
            return Err(AppError::InvalidInput(
                "Search keyword cannot be empty".to_string(),
            ));
        }

        let cleaned = clean_keyword(original);
        if cleaned.is_empty() {
            return Err(AppError::InvalidInput(
                "Search keyword contains no searchable characters".to_string(),
            ));
        }

        let words = dedup_preserving(cleaned.split_whitespace().map(str::to_string));
        let synonyms = generate_synonyms(&cleaned);
        let variants = generate_variants(&cleaned, fuzzy_level);

        let all = dedup_preserving(
            words
                .iter()
                .chain(synonyms.iter())
                .chain(variants.iter())
                .cloned(),
        );

        Ok(Self {
            original: original.to_string(),
            cleaned,
            words,
            synonyms,
            variants,
            all,
        })
    }
}

/// Strip everything except Latin word characters, digits, underscore,
/// whitespace and CJK ideographs, then trim.
fn clean_keyword(keyword: &str) -> String {
    keyword
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || *c == '_'
                || c.is_whitespace()
                || ('\u{4e00}'..='\u{9fff}').contains(c)
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn generate_synonyms(cleaned: &str) -> Vec<String> {
    let mut synonyms = Vec::new();
    for (key, values) in SYNONYM_GROUPS {
        if cleaned.contains(key) {
            synonyms.extend(values.iter().map(|v| v.to_string()));
        }
    }
    dedup_preserving(synonyms.into_iter())
}

/// Suffix and prefix substrings of the cleaned keyword, length >= 2.
/// Fires only at the highest fuzziness tier, for keywords within the
/// variant length window.
fn generate_variants(cleaned: &str, fuzzy_level: FuzzyLevel) -> Vec<String> {
    let chars: Vec<char> = cleaned.chars().collect();
    let len = chars.len();

    if fuzzy_level != FuzzyLevel::High
        || len < MIN_VARIANT_KEYWORD_CHARS
        || len > MAX_VARIANT_KEYWORD_CHARS
    {
        return Vec::new();
    }

    let mut variants = Vec::new();
    // Suffixes, longest first (the full keyword included)
    for i in 0..=(len - 2) {
        variants.push(chars[i..].iter().collect());
    }
    // Prefixes, shortest first
    for i in 2..=len {
        variants.push(chars[..i].iter().collect());
    }

    dedup_preserving(variants.into_iter())
}

fn dedup_preserving<I: Iterator<Item = String>>(items: I) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_level_parsing() {
        assert_eq!(FuzzyLevel::from_param(Some("low")), FuzzyLevel::Low);
        assert_eq!(FuzzyLevel::from_param(Some("high")), FuzzyLevel::High);
        assert_eq!(FuzzyLevel::from_param(None), FuzzyLevel::Medium);
        assert_eq!(FuzzyLevel::from_param(Some("bogus")), FuzzyLevel::Medium);
        assert_eq!(FuzzyLevel::from_param(Some(" high ")), FuzzyLevel::High);
    }

    #[test]
    fn test_cleaning_strips_punctuation() {
        let kw = ProcessedKeywords::process("Re:Zero!!", FuzzyLevel::Low).unwrap();
        assert_eq!(kw.cleaned, "ReZero");
    }

    #[test]
    fn test_cleaning_keeps_cjk_and_word_chars() {
        let kw = ProcessedKeywords::process("进击の巨人 attack_1", FuzzyLevel::Low).unwrap();
        // Hiragana の is outside the CJK ideograph block and gets stripped
        assert_eq!(kw.cleaned, "进击巨人 attack_1");
        for c in kw.cleaned.chars() {
            assert!(
                c.is_ascii_alphanumeric()
                    || c == '_'
                    || c.is_whitespace()
                    || ('\u{4e00}'..='\u{9fff}').contains(&c)
            );
        }
    }

    #[test]
    fn test_blank_keyword_is_rejected() {
        assert!(ProcessedKeywords::process("   ", FuzzyLevel::Medium).is_err());
        assert!(ProcessedKeywords::process("", FuzzyLevel::Medium).is_err());
    }

    #[test]
    fn test_all_punctuation_keyword_is_rejected() {
        let err = ProcessedKeywords::process("!?!?", FuzzyLevel::High).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_tokenization_drops_empty_and_dedups() {
        let kw = ProcessedKeywords::process("one  two one", FuzzyLevel::Low).unwrap();
        assert_eq!(kw.words, vec!["one", "two"]);
    }

    #[test]
    fn test_short_tokens_are_retained_in_words() {
        // Tokens under 2 chars are excluded from match conditions but kept
        // here for scoring and highlighting
        let kw = ProcessedKeywords::process("a titan", FuzzyLevel::Low).unwrap();
        assert_eq!(kw.words, vec!["a", "titan"]);
    }

    #[test]
    fn test_synonym_expansion() {
        let kw = ProcessedKeywords::process("进击的巨人", FuzzyLevel::Medium).unwrap();
        for expected in ["攻击", "进攻", "泰坦", "TITAN"] {
            assert!(kw.synonyms.contains(&expected.to_string()), "{}", expected);
        }
    }

    #[test]
    fn test_synonym_expansion_multiple_groups_dedup() {
        // 动漫 fires {动画, 番剧, 动画片}; the embedded 动画 key does not
        // occur in "动漫电影" so only two groups fire
        let kw = ProcessedKeywords::process("动漫电影", FuzzyLevel::Medium).unwrap();
        assert_eq!(kw.synonyms, vec!["动画", "番剧", "动画片", "剧场版", "电影版"]);
    }

    #[test]
    fn test_no_synonyms_for_unmapped_keyword() {
        let kw = ProcessedKeywords::process("naruto", FuzzyLevel::High).unwrap();
        assert!(kw.synonyms.is_empty());
    }

    #[test]
    fn test_variants_for_abcd() {
        let kw = ProcessedKeywords::process("abcd", FuzzyLevel::High).unwrap();
        assert_eq!(kw.variants, vec!["abcd", "bcd", "cd", "ab", "abc"]);
    }

    #[test]
    fn test_variants_need_high_fuzziness() {
        let kw = ProcessedKeywords::process("abcd", FuzzyLevel::Medium).unwrap();
        assert!(kw.variants.is_empty());
    }

    #[test]
    fn test_variants_need_three_chars() {
        let kw = ProcessedKeywords::process("ab", FuzzyLevel::High).unwrap();
        assert!(kw.variants.is_empty());
    }

    #[test]
    fn test_variants_respect_length_cap() {
        let long = "x".repeat(MAX_VARIANT_KEYWORD_CHARS + 1);
        let kw = ProcessedKeywords::process(&long, FuzzyLevel::High).unwrap();
        assert!(kw.variants.is_empty());

        let at_cap = "ab".repeat(MAX_VARIANT_KEYWORD_CHARS / 2);
        let kw = ProcessedKeywords::process(&at_cap, FuzzyLevel::High).unwrap();
        assert!(!kw.variants.is_empty());
    }

    #[test]
    fn test_variants_are_char_based_for_cjk() {
        let kw = ProcessedKeywords::process("进击巨", FuzzyLevel::High).unwrap();
        assert_eq!(kw.variants, vec!["进击巨", "击巨", "进击"]);
    }

    #[test]
    fn test_all_union_preserves_first_seen_order() {
        let kw = ProcessedKeywords::process("进击", FuzzyLevel::Medium).unwrap();
        // words then synonyms, no variants at medium
        assert_eq!(kw.all, vec!["进击", "攻击", "进攻"]);
    }

    #[test]
    fn test_all_is_deduplicated() {
        let kw = ProcessedKeywords::process("abcd", FuzzyLevel::High).unwrap();
        // "abcd" appears as word, suffix variant and prefix variant; once in all
        assert_eq!(
            kw.all.iter().filter(|t| t.as_str() == "abcd").count(),
            1
        );
        assert!(kw.words.iter().all(|w| kw.all.contains(w)));
        assert!(kw.synonyms.iter().all(|s| kw.all.contains(s)));
        assert!(kw.variants.iter().all(|v| kw.all.contains(v)));
    }
}
