//! Public catalog handlers
//!
//! Each handler owns a cancellation token through a drop guard: when the client
//! disconnects axum drops the handler future, the guard fires and any upstream
//! fetch or backoff in progress stops at its next await.

use super::parse_anime_id;
use crate::modules::http::AppState;
use crate::shared::errors::AppResult;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /anime
pub async fn public_catalog(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let token = CancellationToken::new();
    let _guard = token.clone().drop_guard();

    Ok(Json(state.catalog.public_catalog(&token).await?))
}

/// GET /anime/search?q=
pub async fn search_anime(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    let token = CancellationToken::new();
    let _guard = token.clone().drop_guard();

    Ok(Json(state.catalog.search(&query.q, &token).await?))
}

/// GET /anime/season/now
pub async fn current_season(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let token = CancellationToken::new();
    let _guard = token.clone().drop_guard();

    Ok(Json(state.catalog.current_season(&token).await?))
}

/// GET /anime/:jikan_id
pub async fn anime_detail(
    State(state): State<AppState>,
    Path(jikan_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let jikan_id = parse_anime_id(&jikan_id)?;
    let token = CancellationToken::new();
    let _guard = token.clone().drop_guard();

    Ok(Json(state.catalog.anime_detail(jikan_id, &token).await?))
}

/// DELETE /anime/cache
pub async fn invalidate_catalog_cache(State(state): State<AppState>) -> impl IntoResponse {
    state.catalog.invalidate_cache();
    StatusCode::NO_CONTENT
}
