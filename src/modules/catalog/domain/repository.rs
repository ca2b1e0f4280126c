use async_trait::async_trait;

use crate::modules::catalog::infrastructure::models::{
    AnimeBanner, AnimeInfo, AnimeNews, AnimeTopic,
};
use crate::shared::errors::AppResult;

/// Read-only access to the catalog tables.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<AnimeInfo>>;

    async fn list_by_country(&self, country: &str) -> AppResult<Vec<AnimeInfo>>;

    /// Records airing on the given weekday (status 1-7), most liked first.
    async fn weekly_updates(
        &self,
        country: &str,
        weekday: i32,
        limit: i64,
    ) -> AppResult<Vec<AnimeInfo>>;

    /// Most liked records with a non-zero status.
    async fn ranking(&self, country: &str, limit: i64) -> AppResult<Vec<AnimeInfo>>;

    /// Most liked records regardless of status.
    async fn top_by_likes(&self, country: &str, limit: i64) -> AppResult<Vec<AnimeInfo>>;

    /// Titles of the most liked records.
    async fn top_titles(&self, country: &str, limit: i64) -> AppResult<Vec<String>>;

    async fn banners(&self) -> AppResult<Vec<AnimeBanner>>;

    async fn topics(&self) -> AppResult<Vec<AnimeTopic>>;

    async fn news(&self) -> AppResult<Vec<AnimeNews>>;
}
