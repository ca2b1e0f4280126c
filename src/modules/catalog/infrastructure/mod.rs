pub mod models;
pub mod repository;

pub use models::{AnimeBanner, AnimeInfo, AnimeNews, AnimeTopic};
pub use repository::DieselCatalogRepository;
