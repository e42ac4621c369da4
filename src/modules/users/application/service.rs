use crate::modules::users::domain::{CreateUser, UpdateUser, User, UserRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.list().await
    }

    pub async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Fails with `NotFound` unless a user with `id` exists
    pub async fn ensure_exists(&self, id: Uuid) -> AppResult<()> {
        self.get_user(id).await.map(|_| ())
    }

    pub async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let input = input.normalized();
        validate_profile(
            &input.username,
            input.fullname.as_deref(),
            input.avatar.as_deref(),
            input.bio.as_deref(),
        )?;

        let user = self.user_repo.create(input).await?;
        log_info!("Created user {} ({})", user.username, user.id);
        Ok(user)
    }

    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> AppResult<User> {
        let input = input.normalized();
        validate_profile(
            &input.username,
            input.fullname.as_deref(),
            input.avatar.as_deref(),
            input.bio.as_deref(),
        )?;

        log_debug!("Updating user {}", id);
        self.user_repo
            .update(id, input)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    pub async fn delete_user(&self, id: Uuid) -> AppResult<User> {
        let deleted = self
            .user_repo
            .delete(id)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        log_info!("Deleted user {} ({})", deleted.username, deleted.id);
        Ok(deleted)
    }
}

fn validate_profile(
    username: &str,
    fullname: Option<&str>,
    avatar: Option<&str>,
    bio: Option<&str>,
) -> AppResult<()> {
    Validator::validate_username(username)?;
    if let Some(fullname) = fullname {
        Validator::validate_fullname(fullname)?;
    }
    if let Some(avatar) = avatar {
        Validator::validate_avatar_url(avatar)?;
    }
    if let Some(bio) = bio {
        Validator::validate_bio(bio)?;
    }
    Ok(())
}

fn user_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("User with ID {} not found", id))
}
