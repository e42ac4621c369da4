//! User profile handlers

use super::parse_user_id;
use crate::modules::http::AppState;
use crate::modules::users::{CreateUser, UpdateUser};
use crate::shared::errors::AppResult;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.users.list_users().await?))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    Ok(Json(state.users.get_user(id).await?))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let user = state.users.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    let Json(input) = payload?;
    Ok(Json(state.users.update_user(id, input).await?))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_user_id(&id)?;
    Ok(Json(state.users.delete_user(id).await?))
}
