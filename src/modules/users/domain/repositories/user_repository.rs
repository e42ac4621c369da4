use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::users::domain::{CreateUser, UpdateUser, User};
use crate::shared::errors::AppResult;

/// Port for the `users` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// `None` when no user has this id
    async fn update(&self, id: Uuid, input: UpdateUser) -> AppResult<Option<User>>;

    /// Deleted row, or `None` when no user has this id
    async fn delete(&self, id: Uuid) -> AppResult<Option<User>>;
}
