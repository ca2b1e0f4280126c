use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::modules::catalog::infrastructure::models::{
    AnimeBanner, AnimeInfo, AnimeNews, AnimeTopic,
};
use crate::shared::errors::AppResult;
use crate::AppState;

use super::application::{DetailResponse, ListResponse, TitlesResponse};

/// Routes:
/// - GET /detail/:id              - one record by id
/// - GET /country/:country        - all records for a country
/// - GET /home/banners            - carousel banners
/// - GET /home/topics             - editorial topics
/// - GET /home/news               - news entries
/// - GET /home/weekly/:country    - weekday update feed (?weekday=1..7)
/// - GET /home/ranking/:country   - most liked airing records
/// - GET /home/top-likes          - combined japan/china hot list
/// - GET /home/top-titles/:country - title-only ranking
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/detail/:id", get(detail))
        .route("/country/:country", get(by_country))
        .route("/home/banners", get(banners))
        .route("/home/topics", get(topics))
        .route("/home/news", get(news))
        .route("/home/weekly/:country", get(weekly))
        .route("/home/ranking/:country", get(ranking))
        .route("/home/top-likes", get(top_likes))
        .route("/home/top-titles/:country", get(top_titles))
}

async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<DetailResponse>> {
    let anime = state.catalog.detail(id).await?;
    Ok(Json(DetailResponse::new(
        anime,
        "Anime detail fetched successfully",
    )))
}

async fn by_country(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> AppResult<Json<ListResponse<AnimeInfo>>> {
    let rows = state.catalog.by_country(&country).await?;
    Ok(Json(ListResponse::new(
        rows,
        format!("Anime for country '{}' fetched successfully", country),
    )))
}

#[derive(Debug, Deserialize)]
struct WeeklyParams {
    weekday: Option<String>,
}

async fn weekly(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
    Query(params): Query<WeeklyParams>,
) -> AppResult<Json<ListResponse<AnimeInfo>>> {
    let rows = state
        .catalog
        .weekly(&country, params.weekday.as_deref())
        .await?;
    Ok(Json(ListResponse::new(
        rows,
        format!("Weekly updates for '{}'", country),
    )))
}

async fn ranking(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> AppResult<Json<ListResponse<AnimeInfo>>> {
    let rows = state.catalog.ranking(&country).await?;
    Ok(Json(ListResponse::new(
        rows,
        format!("Ranking for '{}'", country),
    )))
}

async fn top_likes(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ListResponse<AnimeInfo>>> {
    let rows = state.catalog.top_likes().await?;
    Ok(Json(ListResponse::new(rows, "Most liked anime by country")))
}

async fn top_titles(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> AppResult<Json<TitlesResponse>> {
    let titles = state.catalog.top_titles(&country).await?;
    Ok(Json(TitlesResponse::new(
        titles,
        format!("Most liked titles for '{}'", country),
    )))
}

async fn banners(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ListResponse<AnimeBanner>>> {
    let rows = state.catalog.banners().await?;
    Ok(Json(ListResponse::new(rows, "Banners fetched successfully")))
}

async fn topics(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ListResponse<AnimeTopic>>> {
    let rows = state.catalog.topics().await?;
    Ok(Json(ListResponse::new(rows, "Topics fetched successfully")))
}

async fn news(State(state): State<Arc<AppState>>) -> AppResult<Json<ListResponse<AnimeNews>>> {
    let rows = state.catalog.news().await?;
    Ok(Json(ListResponse::new(rows, "News fetched successfully")))
}
