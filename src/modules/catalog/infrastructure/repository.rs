use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::catalog::domain::CatalogRepository;
use crate::schema::{anime_banners, anime_info, anime_news, anime_topics};
use crate::shared::errors::AppResult;
use crate::shared::Database;

use super::models::{AnimeBanner, AnimeInfo, AnimeNews, AnimeTopic};

pub struct DieselCatalogRepository {
    db: Arc<Database>,
}

impl DieselCatalogRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for DieselCatalogRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<AnimeInfo>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<AnimeInfo>> {
            let mut conn = db.get_connection()?;
            let row = anime_info::table
                .filter(anime_info::id.eq(id))
                .select(AnimeInfo::as_select())
                .first::<AnimeInfo>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row)
    }

    async fn list_by_country(&self, country: &str) -> AppResult<Vec<AnimeInfo>> {
        let db = Arc::clone(&self.db);
        let country = country.to_string();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeInfo>> {
            let mut conn = db.get_connection()?;
            let rows = anime_info::table
                .filter(anime_info::country.eq(country))
                .select(AnimeInfo::as_select())
                .load::<AnimeInfo>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows)
    }

    async fn weekly_updates(
        &self,
        country: &str,
        weekday: i32,
        limit: i64,
    ) -> AppResult<Vec<AnimeInfo>> {
        let db = Arc::clone(&self.db);
        let country = country.to_string();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeInfo>> {
            let mut conn = db.get_connection()?;
            let rows = anime_info::table
                .filter(anime_info::country.eq(country))
                .filter(anime_info::status.eq(weekday))
                .order(anime_info::like_count.desc())
                .limit(limit)
                .select(AnimeInfo::as_select())
                .load::<AnimeInfo>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows)
    }

    async fn ranking(&self, country: &str, limit: i64) -> AppResult<Vec<AnimeInfo>> {
        let db = Arc::clone(&self.db);
        let country = country.to_string();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeInfo>> {
            let mut conn = db.get_connection()?;
            let rows = anime_info::table
                .filter(anime_info::country.eq(country))
                .filter(anime_info::status.ne(0))
                .order(anime_info::like_count.desc())
                .limit(limit)
                .select(AnimeInfo::as_select())
                .load::<AnimeInfo>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows)
    }

    async fn top_by_likes(&self, country: &str, limit: i64) -> AppResult<Vec<AnimeInfo>> {
        let db = Arc::clone(&self.db);
        let country = country.to_string();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeInfo>> {
            let mut conn = db.get_connection()?;
            let rows = anime_info::table
                .filter(anime_info::country.eq(country))
                .order(anime_info::like_count.desc())
                .limit(limit)
                .select(AnimeInfo::as_select())
                .load::<AnimeInfo>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows)
    }

    async fn top_titles(&self, country: &str, limit: i64) -> AppResult<Vec<String>> {
        let db = Arc::clone(&self.db);
        let country = country.to_string();

        let titles = task::spawn_blocking(move || -> AppResult<Vec<String>> {
            let mut conn = db.get_connection()?;
            let titles = anime_info::table
                .filter(anime_info::country.eq(country))
                .order(anime_info::like_count.desc())
                .limit(limit)
                .select(anime_info::title)
                .load::<String>(&mut conn)?;
            Ok(titles)
        })
        .await??;

        Ok(titles)
    }

    async fn banners(&self) -> AppResult<Vec<AnimeBanner>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeBanner>> {
            let mut conn = db.get_connection()?;
            let rows = anime_banners::table
                .order(anime_banners::sort_order.asc())
                .select(AnimeBanner::as_select())
                .load::<AnimeBanner>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows)
    }

    async fn topics(&self) -> AppResult<Vec<AnimeTopic>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeTopic>> {
            let mut conn = db.get_connection()?;
            let rows = anime_topics::table
                .select(AnimeTopic::as_select())
                .load::<AnimeTopic>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows)
    }

    async fn news(&self) -> AppResult<Vec<AnimeNews>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeNews>> {
            let mut conn = db.get_connection()?;
            let rows = anime_news::table
                .order(anime_news::published_at.desc())
                .select(AnimeNews::as_select())
                .load::<AnimeNews>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows)
    }
}
