use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use tokio::task;

use crate::log_debug;
use crate::modules::catalog::AnimeInfo;
use crate::modules::search::domain::{MatchClause, SearchFilters, SearchRepository};
use crate::schema::anime_info;
use crate::shared::errors::AppResult;
use crate::shared::Database;

type BoxedPredicate =
    Box<dyn BoxableExpression<anime_info::table, Pg, SqlType = Bool> + 'static>;

pub struct DieselSearchRepository {
    db: Arc<Database>,
}

impl DieselSearchRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn clause_predicate(clause: &MatchClause) -> BoxedPredicate {
        match clause {
            MatchClause::TitleDescriptionTag(pattern) => Box::new(
                anime_info::title
                    .like(pattern.clone())
                    .or(anime_info::description.like(pattern.clone()))
                    .or(anime_info::tag.like(pattern.clone())),
            ),
            MatchClause::TitleDescription(pattern) => Box::new(
                anime_info::title
                    .like(pattern.clone())
                    .or(anime_info::description.like(pattern.clone())),
            ),
            MatchClause::TitleOnly(pattern) => Box::new(anime_info::title.like(pattern.clone())),
        }
    }

    /// Base query with the OR-group of match clauses AND-ed with each
    /// present filter. Clauses bind in emission order; both reads call this
    /// so they evaluate the identical predicate.
    fn filtered_query(
        clauses: &[MatchClause],
        filters: &SearchFilters,
    ) -> anime_info::BoxedQuery<'static, Pg> {
        let mut query = anime_info::table.into_boxed();

        let mut iter = clauses.iter();
        if let Some(first) = iter.next() {
            query = query.filter(Self::clause_predicate(first));
            for clause in iter {
                query = query.or_filter(Self::clause_predicate(clause));
            }
        }

        if let Some(country) = &filters.country {
            query = query.filter(anime_info::country.eq(country.clone()));
        }
        if let Some(status) = filters.status {
            query = query.filter(anime_info::status.eq(status));
        }
        if let Some(min_likes) = filters.min_likes {
            query = query.filter(anime_info::like_count.ge(min_likes));
        }
        if let Some(max_likes) = filters.max_likes {
            query = query.filter(anime_info::like_count.le(max_likes));
        }

        query
    }
}

#[async_trait]
impl SearchRepository for DieselSearchRepository {
    async fn fetch_candidates(
        &self,
        clauses: &[MatchClause],
        filters: &SearchFilters,
    ) -> AppResult<Vec<AnimeInfo>> {
        let db = Arc::clone(&self.db);
        let clauses = clauses.to_vec();
        let filters = filters.clone();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeInfo>> {
            let mut conn = db.get_connection()?;
            let rows = Self::filtered_query(&clauses, &filters)
                .order((anime_info::like_count.desc(), anime_info::id.desc()))
                .select(AnimeInfo::as_select())
                .load::<AnimeInfo>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        log_debug!("Search candidate fetch returned {} rows", rows.len());
        Ok(rows)
    }

    async fn count_matches(
        &self,
        clauses: &[MatchClause],
        filters: &SearchFilters,
    ) -> AppResult<u64> {
        let db = Arc::clone(&self.db);
        let clauses = clauses.to_vec();
        let filters = filters.clone();

        let total = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let total = Self::filtered_query(&clauses, &filters)
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(total)
        })
        .await??;

        Ok(total.max(0) as u64)
    }
}
