pub mod repository;

pub use repository::DieselSearchRepository;
