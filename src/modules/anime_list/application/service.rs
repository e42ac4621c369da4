use crate::modules::anime_list::domain::{
    AddListItem, AnimeListEntry, AnimeListRepository, UpdateProgress,
};
use crate::modules::users::UserService;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct AnimeListService {
    list_repo: Arc<dyn AnimeListRepository>,
    users: Arc<UserService>,
}

impl AnimeListService {
    pub fn new(list_repo: Arc<dyn AnimeListRepository>, users: Arc<UserService>) -> Self {
        Self { list_repo, users }
    }

    /// The user's list keyed by Jikan id
    pub async fn my_list(&self, user_id: Uuid) -> AppResult<BTreeMap<i64, AnimeListEntry>> {
        self.users.ensure_exists(user_id).await?;

        let entries = self.list_repo.list_for_user(user_id).await?;
        Ok(entries
            .into_iter()
            .map(|entry| (entry.anime_id, entry))
            .collect())
    }

    /// Add an anime with default progress. Re-adding resets the existing entry.
    pub async fn add_item(&self, user_id: Uuid, item: AddListItem) -> AppResult<AnimeListEntry> {
        Validator::validate_jikan_id(item.jikan_id)?;
        Validator::validate_anime_title(&item.title)?;
        self.users.ensure_exists(user_id).await?;

        let entry = self
            .list_repo
            .upsert(AnimeListEntry::new(user_id, item))
            .await?;

        log_info!("User {} added anime {} to list", user_id, entry.anime_id);
        Ok(entry)
    }

    pub async fn remove_item(&self, user_id: Uuid, anime_id: i64) -> AppResult<()> {
        self.users.ensure_exists(user_id).await?;

        if !self.list_repo.remove(user_id, anime_id).await? {
            return Err(entry_not_found(user_id, anime_id));
        }

        log_info!("User {} removed anime {} from list", user_id, anime_id);
        Ok(())
    }

    pub async fn toggle_favorite(
        &self,
        user_id: Uuid,
        anime_id: i64,
        is_favorite: bool,
    ) -> AppResult<AnimeListEntry> {
        self.users.ensure_exists(user_id).await?;

        log_debug!(
            "Setting favorite={} for anime {} (user {})",
            is_favorite,
            anime_id,
            user_id
        );
        self.list_repo
            .set_favorite(user_id, anime_id, is_favorite)
            .await?
            .ok_or_else(|| entry_not_found(user_id, anime_id))
    }

    pub async fn update_progress(
        &self,
        user_id: Uuid,
        anime_id: i64,
        progress: UpdateProgress,
    ) -> AppResult<AnimeListEntry> {
        Validator::validate_episodes_watched(progress.episodes_watched)?;
        if let Some(score) = progress.user_score {
            Validator::validate_user_score(score)?;
        }
        self.users.ensure_exists(user_id).await?;

        self.list_repo
            .update_progress(user_id, anime_id, progress)
            .await?
            .ok_or_else(|| entry_not_found(user_id, anime_id))
    }

    pub async fn is_item_in_list(&self, user_id: Uuid, anime_id: i64) -> AppResult<bool> {
        self.users.ensure_exists(user_id).await?;
        Ok(self.list_repo.find(user_id, anime_id).await?.is_some())
    }
}

fn entry_not_found(user_id: Uuid, anime_id: i64) -> AppError {
    AppError::NotFound(format!(
        "Anime {} is not on the list of user {}",
        anime_id, user_id
    ))
}
