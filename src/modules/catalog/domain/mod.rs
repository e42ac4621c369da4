pub mod anime_summary;
pub mod slug;

pub use anime_summary::{AnimeSummary, SeasonEntry, PLACEHOLDER_PICTURE};
pub use slug::create_slug;
