pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::CatalogService;
pub use domain::CatalogRepository;
pub use infrastructure::{AnimeBanner, AnimeInfo, AnimeNews, AnimeTopic, DieselCatalogRepository};
