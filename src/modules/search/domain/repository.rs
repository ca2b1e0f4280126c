use async_trait::async_trait;

use crate::modules::catalog::AnimeInfo;
use crate::shared::errors::AppResult;

use super::conditions::{MatchClause, SearchFilters};

/// Read-only access to the anime store for the search pipeline.
///
/// Both reads take the same clause list and filters and must evaluate the
/// identical WHERE predicate; callers issue them concurrently. `clauses` is
/// never empty — the keyword processor rejects queries that cannot emit the
/// tier-1 clause.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Every row matching the predicate, pre-ordered by like-count
    /// descending then id descending. Relevance ordering and pagination
    /// happen in-process, on top of this set.
    async fn fetch_candidates(
        &self,
        clauses: &[MatchClause],
        filters: &SearchFilters,
    ) -> AppResult<Vec<AnimeInfo>>;

    /// Unpaginated count of rows matching the same predicate.
    async fn count_matches(
        &self,
        clauses: &[MatchClause],
        filters: &SearchFilters,
    ) -> AppResult<u64>;
}
