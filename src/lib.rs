pub mod modules;
pub mod schema;
pub mod shared;

use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use modules::catalog::{CatalogRepository, CatalogService, DieselCatalogRepository};
use modules::search::{DieselSearchRepository, SearchRepository, SearchService};
use shared::Database;

/// Application state shared across handlers.
pub struct AppState {
    pub search: Arc<SearchService>,
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    /// Wire the services against Diesel-backed repositories.
    pub fn new(database: Arc<Database>) -> Self {
        let search_repo: Arc<dyn SearchRepository> =
            Arc::new(DieselSearchRepository::new(Arc::clone(&database)));
        let catalog_repo: Arc<dyn CatalogRepository> =
            Arc::new(DieselCatalogRepository::new(database));

        Self::with_repositories(search_repo, catalog_repo)
    }

    /// Wire the services against arbitrary repository implementations
    /// (useful for testing the HTTP layer without a database).
    pub fn with_repositories(
        search_repo: Arc<dyn SearchRepository>,
        catalog_repo: Arc<dyn CatalogRepository>,
    ) -> Self {
        Self {
            search: Arc::new(SearchService::new(search_repo)),
            catalog: Arc::new(CatalogService::new(catalog_repo)),
        }
    }
}

/// Assemble the full application router.
///
/// The site is consumed by a separate frontend, so CORS is open for GET.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(Any);

    Router::new()
        .merge(modules::search::handlers::router())
        .merge(modules::catalog::handlers::router())
        .layer(cors)
        .with_state(state)
}
