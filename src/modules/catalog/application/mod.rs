pub mod dto;
pub mod service;

pub use dto::{DetailResponse, ListResponse, TitlesResponse};
pub use service::CatalogService;
