//! Public catalog built on top of the Jikan fetcher: multi-page aggregation
//! behind a TTL cache, search, current season and detail lookups.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::CatalogService;
pub use domain::{create_slug, AnimeSummary, SeasonEntry};
pub use infrastructure::{CacheStats, CatalogCache};
