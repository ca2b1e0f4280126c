use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::shared::errors::AppResult;
use crate::AppState;

use super::application::{FuzzySearchParams, FuzzySearchResponse};

/// Routes:
/// - GET /search/fuzzy - keyword search with fuzzy expansion
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search/fuzzy", get(fuzzy_search))
}

async fn fuzzy_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FuzzySearchParams>,
) -> AppResult<Json<FuzzySearchResponse>> {
    let response = state.search.fuzzy_search(&params).await?;
    Ok(Json(response))
}
