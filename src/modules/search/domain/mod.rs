pub mod conditions;
pub mod highlight;
pub mod keywords;
pub mod relevance;
pub mod repository;

pub use conditions::{build_match_clauses, MatchClause, SearchFilters};
pub use highlight::{analyze_match, highlight_matches, MatchInfo};
pub use keywords::{FuzzyLevel, ProcessedKeywords};
pub use relevance::{relevance_rank, sort_by_relevance};
pub use repository::SearchRepository;
