//! Per-user anime list (`users_anime_list`)

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::AnimeListService;
pub use domain::{AddListItem, AnimeListEntry, AnimeListRepository, UpdateProgress, WatchStatus};
pub use infrastructure::persistence::AnimeListRepositoryImpl;
