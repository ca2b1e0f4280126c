use std::sync::Arc;

use chrono::Utc;

use crate::log_debug;
use crate::modules::catalog::AnimeInfo;
use crate::modules::search::domain::highlight::DESCRIPTION_HIGHLIGHT_CHARS;
use crate::modules::search::domain::{
    analyze_match, build_match_clauses, highlight_matches, sort_by_relevance, FuzzyLevel,
    ProcessedKeywords, SearchFilters, SearchRepository,
};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams, DEFAULT_PER_PAGE};
use crate::shared::errors::AppResult;

use super::dto::{
    AnnotatedAnime, FuzzySearchParams, FuzzySearchResponse, PaginationInfo, SearchInfo,
};

/// Orchestrates one fuzzy search request: keyword expansion, the two
/// concurrent store reads, in-process ranking, pagination and row
/// annotation. All state is request-local.
pub struct SearchService {
    repository: Arc<dyn SearchRepository>,
}

impl SearchService {
    pub fn new(repository: Arc<dyn SearchRepository>) -> Self {
        Self { repository }
    }

    pub async fn fuzzy_search(&self, params: &FuzzySearchParams) -> AppResult<FuzzySearchResponse> {
        let fuzzy_level = FuzzyLevel::from_param(params.fuzzy_level.as_deref());
        let keywords =
            ProcessedKeywords::process(params.keyword.as_deref().unwrap_or(""), fuzzy_level)?;

        let filters = SearchFilters::from_params(
            params.country.as_deref(),
            params.status.as_deref(),
            params.min_likes.as_deref(),
            params.max_likes.as_deref(),
        );
        let pagination = PaginationParams::clamped(
            parse_or(params.page.as_deref(), 1),
            parse_or(params.limit.as_deref(), DEFAULT_PER_PAGE),
        );

        let clauses = build_match_clauses(&keywords, fuzzy_level);
        log_debug!(
            "Fuzzy search '{}' ({} level, {} clauses)",
            keywords.cleaned,
            fuzzy_level.as_str(),
            clauses.len()
        );

        // Data page and total count are independent reads over the same
        // predicate; either failing fails the request with no partial result.
        let (mut candidates, total) = tokio::try_join!(
            self.repository.fetch_candidates(&clauses, &filters),
            self.repository.count_matches(&clauses, &filters),
        )?;

        sort_by_relevance(&mut candidates, &keywords, |row| {
            (row.title.clone(), row.like_count, row.id)
        });

        let page_rows: Vec<AnimeInfo> = candidates
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit())
            .collect();

        let data: Vec<AnnotatedAnime> = page_rows
            .into_iter()
            .map(|record| annotate(record, &keywords))
            .collect();

        let paged = PaginatedResult::new(data, total, &pagination);
        let message = format!(
            "Fuzzy search for \"{}\" found {} results",
            keywords.original, total
        );

        Ok(FuzzySearchResponse {
            success: true,
            search_info: SearchInfo {
                original_keyword: keywords.original.clone(),
                fuzzy_level,
                total_found: total,
                search_time: Utc::now().to_rfc3339(),
                processed_keywords: keywords,
            },
            pagination: PaginationInfo {
                current_page: paged.page,
                per_page: paged.per_page,
                total_items: paged.total_items,
                total_pages: paged.total_pages,
                has_next_page: paged.has_next,
                has_prev_page: paged.has_prev,
                next_page: paged.next_page(),
                prev_page: paged.prev_page(),
            },
            data: paged.items,
            filters,
            message,
        })
    }
}

fn annotate(record: AnimeInfo, keywords: &ProcessedKeywords) -> AnnotatedAnime {
    let match_info = analyze_match(&record.title, &record.description, keywords);
    let highlighted_title = highlight_matches(&record.title, &keywords.all, None);
    let highlighted_description = highlight_matches(
        &record.description,
        &keywords.all,
        Some(DESCRIPTION_HIGHLIGHT_CHARS),
    );

    AnnotatedAnime {
        record,
        match_info,
        highlighted_title,
        highlighted_description,
    }
}

fn parse_or(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
