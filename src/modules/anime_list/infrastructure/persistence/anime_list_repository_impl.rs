use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::anime_list::domain::{AnimeListEntry, AnimeListRepository, UpdateProgress};
use crate::modules::anime_list::infrastructure::models::{
    to_entries, AnimeListModel, NewAnimeListEntry, ProgressChangeset,
};
use crate::schema::users_anime_list;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct AnimeListRepositoryImpl {
    db: Arc<Database>,
}

impl AnimeListRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnimeListRepository for AnimeListRepositoryImpl {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<AnimeListEntry>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<AnimeListEntry>> {
            let started = Instant::now();
            let mut conn = db.get_connection()?;

            let rows = users_anime_list::table
                .filter(users_anime_list::user_id.eq(user_id))
                .order(users_anime_list::anime_id.asc())
                .select(AnimeListModel::as_select())
                .load::<AnimeListModel>(&mut conn)?;

            LogContext::db_operation(
                "SELECT",
                "users_anime_list",
                Some(started.elapsed().as_millis() as u64),
            );
            to_entries(rows)
        })
        .await?
    }

    async fn find(&self, user_id: Uuid, anime_id: i64) -> AppResult<Option<AnimeListEntry>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<AnimeListEntry>> {
            let mut conn = db.get_connection()?;

            let row = users_anime_list::table
                .find((user_id, anime_id))
                .select(AnimeListModel::as_select())
                .first::<AnimeListModel>(&mut conn)
                .optional()?;

            row.map(AnimeListEntry::try_from).transpose()
        })
        .await?
    }

    async fn upsert(&self, entry: AnimeListEntry) -> AppResult<AnimeListEntry> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<AnimeListEntry> {
            LogContext::db_operation("UPSERT", "users_anime_list", None);
            let mut conn = db.get_connection()?;
            let row = NewAnimeListEntry::from(&entry);

            let saved = diesel::insert_into(users_anime_list::table)
                .values(&row)
                .on_conflict((users_anime_list::user_id, users_anime_list::anime_id))
                .do_update()
                .set(&row)
                .returning(AnimeListModel::as_returning())
                .get_result::<AnimeListModel>(&mut conn)?;

            log_debug!("Saved anime {} for user {}", saved.anime_id, saved.user_id);
            AnimeListEntry::try_from(saved)
        })
        .await?
    }

    async fn remove(&self, user_id: Uuid, anime_id: i64) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            LogContext::db_operation("DELETE", "users_anime_list", None);
            let mut conn = db.get_connection()?;

            let deleted =
                diesel::delete(users_anime_list::table.find((user_id, anime_id))).execute(&mut conn)?;

            Ok(deleted > 0)
        })
        .await?
    }

    async fn set_favorite(
        &self,
        user_id: Uuid,
        anime_id: i64,
        is_favorite: bool,
    ) -> AppResult<Option<AnimeListEntry>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<AnimeListEntry>> {
            let mut conn = db.get_connection()?;

            let row = diesel::update(users_anime_list::table.find((user_id, anime_id)))
                .set(users_anime_list::is_favorite.eq(is_favorite))
                .returning(AnimeListModel::as_returning())
                .get_result::<AnimeListModel>(&mut conn)
                .optional()?;

            row.map(AnimeListEntry::try_from).transpose()
        })
        .await?
    }

    async fn update_progress(
        &self,
        user_id: Uuid,
        anime_id: i64,
        progress: UpdateProgress,
    ) -> AppResult<Option<AnimeListEntry>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<AnimeListEntry>> {
            LogContext::db_operation("UPDATE", "users_anime_list", None);
            let mut conn = db.get_connection()?;

            let changes = ProgressChangeset {
                status: progress.status.as_str().to_string(),
                episodes_watched: progress.episodes_watched,
                user_score: progress.user_score,
            };

            let row = diesel::update(users_anime_list::table.find((user_id, anime_id)))
                .set(&changes)
                .returning(AnimeListModel::as_returning())
                .get_result::<AnimeListModel>(&mut conn)
                .optional()?;

            row.map(AnimeListEntry::try_from).transpose()
        })
        .await?
    }
}
