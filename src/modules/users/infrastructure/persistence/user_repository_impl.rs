use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use uuid::Uuid;

use crate::modules::users::domain::{CreateUser, UpdateUser, User, UserRepository};
use crate::modules::users::infrastructure::models::{NewUser, UserChangeset, UserModel};
use crate::schema::users;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<User>> {
            let started = Instant::now();
            let mut conn = db.get_connection()?;

            let rows = users::table
                .order(users::created_at.asc())
                .select(UserModel::as_select())
                .load::<UserModel>(&mut conn)?;

            LogContext::db_operation(
                "SELECT",
                "users",
                Some(started.elapsed().as_millis() as u64),
            );
            Ok(rows.into_iter().map(User::from).collect())
        })
        .await?
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<User>> {
            let mut conn = db.get_connection()?;

            let row = users::table
                .find(id)
                .select(UserModel::as_select())
                .first::<UserModel>(&mut conn)
                .optional()?;

            Ok(row.map(User::from))
        })
        .await?
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<User> {
            LogContext::db_operation("INSERT", "users", None);
            let mut conn = db.get_connection()?;

            let new_user = NewUser {
                username: input.username,
                fullname: input.fullname,
                avatar: input.avatar,
                bio: input.bio,
            };

            let row = diesel::insert_into(users::table)
                .values(&new_user)
                .returning(UserModel::as_returning())
                .get_result::<UserModel>(&mut conn)?;

            Ok(row.into())
        })
        .await?
    }

    async fn update(&self, id: Uuid, input: UpdateUser) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<User>> {
            LogContext::db_operation("UPDATE", "users", None);
            let mut conn = db.get_connection()?;

            let changes = UserChangeset {
                username: input.username,
                fullname: input.fullname,
                avatar: input.avatar,
                bio: input.bio,
            };

            let row = diesel::update(users::table.find(id))
                .set(&changes)
                .returning(UserModel::as_returning())
                .get_result::<UserModel>(&mut conn)
                .optional()?;

            Ok(row.map(User::from))
        })
        .await?
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<User>> {
            LogContext::db_operation("DELETE", "users", None);
            let mut conn = db.get_connection()?;

            // users_anime_list rows go with it (ON DELETE CASCADE)
            let row = diesel::delete(users::table.find(id))
                .returning(UserModel::as_returning())
                .get_result::<UserModel>(&mut conn)
                .optional()?;

            Ok(row.map(User::from))
        })
        .await?
    }
}
