//! Per-user list handlers

use super::{parse_anime_id, parse_user_id};
use crate::modules::anime_list::{AddListItem, UpdateProgress};
use crate::modules::http::AppState;
use crate::shared::errors::AppResult;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct FavoriteBody {
    pub is_favorite: bool,
}

/// GET /users/:id/list
pub async fn get_list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user_id = parse_user_id(&user_id)?;
    Ok(Json(state.anime_list.my_list(user_id).await?))
}

/// POST /users/:id/list
pub async fn add_list_item(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<AddListItem>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let user_id = parse_user_id(&user_id)?;
    let Json(item) = payload?;
    let entry = state.anime_list.add_item(user_id, item).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /users/:id/list/:anime_id
pub async fn check_list_item(
    State(state): State<AppState>,
    Path((user_id, anime_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let user_id = parse_user_id(&user_id)?;
    let anime_id = parse_anime_id(&anime_id)?;
    let in_list = state.anime_list.is_item_in_list(user_id, anime_id).await?;
    Ok(Json(json!({ "anime_id": anime_id, "in_list": in_list })))
}

/// PUT /users/:id/list/:anime_id
pub async fn update_list_item(
    State(state): State<AppState>,
    Path((user_id, anime_id)): Path<(String, String)>,
    payload: Result<Json<UpdateProgress>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let user_id = parse_user_id(&user_id)?;
    let anime_id = parse_anime_id(&anime_id)?;
    let Json(progress) = payload?;
    Ok(Json(
        state
            .anime_list
            .update_progress(user_id, anime_id, progress)
            .await?,
    ))
}

/// PUT /users/:id/list/:anime_id/favorite
pub async fn set_favorite(
    State(state): State<AppState>,
    Path((user_id, anime_id)): Path<(String, String)>,
    payload: Result<Json<FavoriteBody>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let user_id = parse_user_id(&user_id)?;
    let anime_id = parse_anime_id(&anime_id)?;
    let Json(body) = payload?;
    Ok(Json(
        state
            .anime_list
            .toggle_favorite(user_id, anime_id, body.is_favorite)
            .await?,
    ))
}

/// DELETE /users/:id/list/:anime_id
pub async fn remove_list_item(
    State(state): State<AppState>,
    Path((user_id, anime_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let user_id = parse_user_id(&user_id)?;
    let anime_id = parse_anime_id(&anime_id)?;
    state.anime_list.remove_item(user_id, anime_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
