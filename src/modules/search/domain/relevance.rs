use std::cmp::Reverse;

use super::keywords::ProcessedKeywords;

/// Rank for rows whose title matched nothing directly; such rows were pulled
/// in via description, tag, synonym or variant predicates.
pub const FALLBACK_RANK: u32 = 10;

/// Discrete relevance bucket for a title, lower is better.
///
/// 1 — title equals the cleaned keyword exactly;
/// 2 — title contains the cleaned keyword;
/// 3 + index — title contains the token at `index` (first match wins);
/// 10 — fallback.
pub fn relevance_rank(title: &str, keywords: &ProcessedKeywords) -> u32 {
    if title == keywords.cleaned {
        return 1;
    }
    if title.contains(&keywords.cleaned) {
        return 2;
    }
    if let Some(index) = keywords
        .words
        .iter()
        .position(|word| title.contains(word.as_str()))
    {
        return 3 + index as u32;
    }
    FALLBACK_RANK
}

/// Order candidates by rank ascending, then like-count descending, then id
/// descending. The store only answers "what matches"; this is where "how
/// good is the match" is decided.
pub fn sort_by_relevance<T, F>(candidates: &mut [T], keywords: &ProcessedKeywords, key: F)
where
    F: Fn(&T) -> (String, i32, i32),
{
    candidates.sort_by_key(|candidate| {
        let (title, like_count, id) = key(candidate);
        (
            relevance_rank(&title, keywords),
            Reverse(like_count),
            Reverse(id),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search::domain::keywords::FuzzyLevel;

    fn keywords(raw: &str) -> ProcessedKeywords {
        ProcessedKeywords::process(raw, FuzzyLevel::Medium).unwrap()
    }

    #[test]
    fn test_exact_title_is_rank_one() {
        let kw = keywords("进击");
        assert_eq!(relevance_rank("进击", &kw), 1);
    }

    #[test]
    fn test_containing_title_is_rank_two() {
        let kw = keywords("进击");
        assert_eq!(relevance_rank("进击的巨人", &kw), 2);
    }

    #[test]
    fn test_token_rank_uses_token_position() {
        let kw = keywords("attack titan");
        // No full-phrase match; first token misses, second hits
        assert_eq!(relevance_rank("rise of titan", &kw), 4);
        // First token hits, position 0 wins even if later tokens also match
        assert_eq!(relevance_rank("attack force titan", &kw), 3);
    }

    #[test]
    fn test_fallback_rank_for_title_without_matches() {
        let kw = keywords("进击");
        assert_eq!(relevance_rank("某部动画", &kw), FALLBACK_RANK);
    }

    #[test]
    fn test_rank_ordering_is_strict() {
        let kw = keywords("attack titan");
        let exact = relevance_rank("attack titan", &kw);
        let contains = relevance_rank("attack titan final", &kw);
        let token = relevance_rank("titan wars", &kw);
        let fallback = relevance_rank("unrelated", &kw);
        assert!(exact < contains && contains < token && token < fallback);
    }

    #[test]
    fn test_sort_orders_rank_then_likes_then_id() {
        let kw = keywords("进击");
        let mut rows = vec![
            (3, "某部动画".to_string(), 900), // fallback, most likes
            (1, "进击的巨人".to_string(), 50), // contains
            (2, "进击".to_string(), 5),       // exact, fewest likes
            (4, "进击的巨人".to_string(), 50), // contains, same likes, higher id
        ];
        sort_by_relevance(&mut rows, &kw, |(id, title, likes)| {
            (title.clone(), *likes, *id)
        });
        let ids: Vec<i32> = rows.iter().map(|(id, _, _)| *id).collect();
        // exact first regardless of like_count; ties on rank+likes break by id desc
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }
}
