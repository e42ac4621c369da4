pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::list_entry::{AddListItem, AnimeListEntry, UpdateProgress};
pub use repositories::anime_list_repository::AnimeListRepository;
pub use value_objects::WatchStatus;
