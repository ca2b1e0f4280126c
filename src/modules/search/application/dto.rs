use serde::{Deserialize, Serialize};

use crate::modules::catalog::AnimeInfo;
use crate::modules::search::domain::{FuzzyLevel, MatchInfo, ProcessedKeywords, SearchFilters};

/// Raw query-string parameters of `GET /search/fuzzy`.
///
/// Everything except `keyword` is optional and deliberately typed as a
/// string: malformed numerics coerce to "absent" instead of rejecting the
/// request at deserialization time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzySearchParams {
    pub keyword: Option<String>,
    pub country: Option<String>,
    pub status: Option<String>,
    pub min_likes: Option<String>,
    pub max_likes: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub fuzzy_level: Option<String>,
}

/// An anime row enriched with match metadata and highlighted text fields.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedAnime {
    #[serde(flatten)]
    pub record: AnimeInfo,
    pub match_info: MatchInfo,
    pub highlighted_title: String,
    pub highlighted_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchInfo {
    pub original_keyword: String,
    pub processed_keywords: ProcessedKeywords,
    pub fuzzy_level: FuzzyLevel,
    pub total_found: u64,
    pub search_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct FuzzySearchResponse {
    pub success: bool,
    pub data: Vec<AnnotatedAnime>,
    pub search_info: SearchInfo,
    pub pagination: PaginationInfo,
    pub filters: SearchFilters,
    pub message: String,
}
