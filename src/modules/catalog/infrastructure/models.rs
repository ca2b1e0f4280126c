use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{anime_banners, anime_info, anime_news, anime_topics};

/// Main anime record
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = anime_info)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnimeInfo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub country: String,
    pub status: i32,
    pub like_count: i32,
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Carousel banner shown on the home page
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = anime_banners)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnimeBanner {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub sort_order: i32,
}

/// Editorial topic block
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = anime_topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnimeTopic {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub cover_url: Option<String>,
}

/// News entry
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = anime_news)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnimeNews {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
}
