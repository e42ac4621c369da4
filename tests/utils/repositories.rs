/// In-memory repositories standing in for Postgres
///
/// Same contract as the diesel implementations, including the cascade from
/// `users` to `users_anime_list` on delete.
use animepulse::modules::anime_list::{AnimeListEntry, AnimeListRepository, UpdateProgress};
use animepulse::modules::users::{CreateUser, UpdateUser, User, UserRepository};
use animepulse::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

type ListRows = Arc<Mutex<BTreeMap<(Uuid, i64), AnimeListEntry>>>;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    list_rows: ListRows,
}

#[derive(Default)]
pub struct InMemoryAnimeListRepository {
    rows: ListRows,
}

/// A user table and a list table sharing storage for the cascade
pub fn in_memory_repositories() -> (Arc<InMemoryUserRepository>, Arc<InMemoryAnimeListRepository>) {
    let rows: ListRows = Arc::default();
    let users = InMemoryUserRepository {
        users: Mutex::new(Vec::new()),
        list_rows: Arc::clone(&rows),
    };
    (
        Arc::new(users),
        Arc::new(InMemoryAnimeListRepository { rows }),
    )
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == input.username) {
            return Err(AppError::ValidationError(format!(
                "Already exists: username {}",
                input.username
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            fullname: input.fullname,
            avatar: input.avatar,
            bio: input.bio,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, input: UpdateUser) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.username = input.username;
            user.fullname = input.fullname;
            user.avatar = input.avatar;
            user.bio = input.bio;
            user.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        let position = users.iter().position(|u| u.id == id);
        let removed = position.map(|index| users.remove(index));

        if removed.is_some() {
            self.list_rows
                .lock()
                .unwrap()
                .retain(|(user_id, _), _| *user_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl AnimeListRepository for InMemoryAnimeListRepository {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<AnimeListEntry>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find(&self, user_id: Uuid, anime_id: i64) -> AppResult<Option<AnimeListEntry>> {
        Ok(self.rows.lock().unwrap().get(&(user_id, anime_id)).cloned())
    }

    async fn upsert(&self, entry: AnimeListEntry) -> AppResult<AnimeListEntry> {
        self.rows
            .lock()
            .unwrap()
            .insert((entry.user_id, entry.anime_id), entry.clone());
        Ok(entry)
    }

    async fn remove(&self, user_id: Uuid, anime_id: i64) -> AppResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .remove(&(user_id, anime_id))
            .is_some())
    }

    async fn set_favorite(
        &self,
        user_id: Uuid,
        anime_id: i64,
        is_favorite: bool,
    ) -> AppResult<Option<AnimeListEntry>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&(user_id, anime_id)).map(|entry| {
            entry.is_favorite = is_favorite;
            entry.clone()
        }))
    }

    async fn update_progress(
        &self,
        user_id: Uuid,
        anime_id: i64,
        progress: UpdateProgress,
    ) -> AppResult<Option<AnimeListEntry>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&(user_id, anime_id)).map(|entry| {
            entry.status = progress.status;
            entry.episodes_watched = progress.episodes_watched;
            entry.user_score = progress.user_score;
            entry.clone()
        }))
    }
}
