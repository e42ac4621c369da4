//! Route handlers grouped by resource

pub mod anime_list;
pub mod catalog;
pub mod system;
pub mod users;

pub use anime_list::*;
pub use catalog::*;
pub use system::*;
pub use users::*;

use crate::shared::errors::AppResult;
use uuid::Uuid;

/// Path ids are parsed by hand so malformed ones get the JSON error body
pub(crate) fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    Ok(Uuid::parse_str(raw)?)
}

pub(crate) fn parse_anime_id(raw: &str) -> AppResult<i64> {
    Ok(raw.parse::<i64>()?)
}
