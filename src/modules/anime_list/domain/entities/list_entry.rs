use crate::modules::anime_list::domain::WatchStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One anime on a user's list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeListEntry {
    pub user_id: Uuid,
    /// Jikan (MyAnimeList) id
    pub anime_id: i64,
    pub status: WatchStatus,
    pub episodes_watched: i32,
    pub user_score: Option<i32>,
    pub title: String,
    pub picture: Option<String>,
    pub is_favorite: bool,
}

impl AnimeListEntry {
    /// Fresh entry as added from a catalog card
    pub fn new(user_id: Uuid, item: AddListItem) -> Self {
        Self {
            user_id,
            anime_id: item.jikan_id,
            status: WatchStatus::Watching,
            episodes_watched: 0,
            user_score: None,
            title: item.title,
            picture: item.picture,
            is_favorite: false,
        }
    }
}

/// Body of `POST /users/{id}/list`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddListItem {
    pub jikan_id: i64,
    pub title: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Body of `PUT /users/{id}/list/{anime_id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateProgress {
    pub status: WatchStatus,
    pub episodes_watched: i32,
    #[serde(default)]
    pub user_score: Option<i32>,
}
