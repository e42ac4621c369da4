use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::anime_list::domain::{AnimeListEntry, UpdateProgress};
use crate::shared::errors::AppResult;

/// Port for the `users_anime_list` table. Rows are keyed by `(user_id, anime_id)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeListRepository: Send + Sync {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<AnimeListEntry>>;

    async fn find(&self, user_id: Uuid, anime_id: i64) -> AppResult<Option<AnimeListEntry>>;

    /// Insert, or overwrite the existing row for the same key
    async fn upsert(&self, entry: AnimeListEntry) -> AppResult<AnimeListEntry>;

    /// `false` when there was nothing to remove
    async fn remove(&self, user_id: Uuid, anime_id: i64) -> AppResult<bool>;

    async fn set_favorite(
        &self,
        user_id: Uuid,
        anime_id: i64,
        is_favorite: bool,
    ) -> AppResult<Option<AnimeListEntry>>;

    async fn update_progress(
        &self,
        user_id: Uuid,
        anime_id: i64,
        progress: UpdateProgress,
    ) -> AppResult<Option<AnimeListEntry>>;
}
