pub mod dto;
pub mod service;

pub use dto::{AnnotatedAnime, FuzzySearchParams, FuzzySearchResponse};
pub use service::SearchService;
