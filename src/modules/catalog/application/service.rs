use std::sync::Arc;

use crate::modules::catalog::domain::CatalogRepository;
use crate::modules::catalog::infrastructure::models::{
    AnimeBanner, AnimeInfo, AnimeNews, AnimeTopic,
};
use crate::shared::errors::{AppError, AppResult};

/// Records shown per weekday update feed
const WEEKLY_UPDATE_LIMIT: i64 = 25;
/// Records shown per ranking block
const RANKING_LIMIT: i64 = 6;
/// Records per country in the combined hot list
const TOP_LIKES_PER_COUNTRY: i64 = 6;
/// Titles shown in the sidebar ranking
const TOP_TITLES_LIMIT: i64 = 8;

/// Catalog read operations: detail lookup, per-country listings and the
/// home-page feeds.
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn detail(&self, id: i32) -> AppResult<AnimeInfo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No anime found with id {}", id)))
    }

    pub async fn by_country(&self, country: &str) -> AppResult<Vec<AnimeInfo>> {
        let rows = self.repository.list_by_country(country).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound(format!(
                "No anime found for country '{}'",
                country
            )));
        }
        Ok(rows)
    }

    /// Weekday feed: `weekday` must be 1-7 (Monday through Sunday).
    pub async fn weekly(&self, country: &str, weekday: Option<&str>) -> AppResult<Vec<AnimeInfo>> {
        let weekday: i32 = weekday
            .and_then(|w| w.trim().parse().ok())
            .filter(|w| (1..=7).contains(w))
            .ok_or_else(|| {
                AppError::InvalidInput(
                    "weekday must be a number between 1 and 7".to_string(),
                )
            })?;

        self.repository
            .weekly_updates(country, weekday, WEEKLY_UPDATE_LIMIT)
            .await
    }

    pub async fn ranking(&self, country: &str) -> AppResult<Vec<AnimeInfo>> {
        self.repository.ranking(country, RANKING_LIMIT).await
    }

    /// Combined hot list: top records for japan and china, fetched
    /// concurrently, japan first.
    pub async fn top_likes(&self) -> AppResult<Vec<AnimeInfo>> {
        let (mut japan, china) = tokio::try_join!(
            self.repository.top_by_likes("japan", TOP_LIKES_PER_COUNTRY),
            self.repository.top_by_likes("china", TOP_LIKES_PER_COUNTRY),
        )?;
        japan.extend(china);
        Ok(japan)
    }

    pub async fn top_titles(&self, country: &str) -> AppResult<Vec<String>> {
        self.repository.top_titles(country, TOP_TITLES_LIMIT).await
    }

    pub async fn banners(&self) -> AppResult<Vec<AnimeBanner>> {
        self.repository.banners().await
    }

    pub async fn topics(&self) -> AppResult<Vec<AnimeTopic>> {
        self.repository.topics().await
    }

    pub async fn news(&self) -> AppResult<Vec<AnimeNews>> {
        self.repository.news().await
    }
}
