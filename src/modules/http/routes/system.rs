//! Liveness and health handlers

use crate::modules::http::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// GET /
pub async fn root() -> &'static str {
    "API is running"
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.database.as_ref().map(|db| db.pool_status());
    let catalog = state.catalog.config();
    let cache = state.catalog.cache_stats();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "catalog": {
            "cache_hit_rate": cache.hit_rate(),
            "cache": cache,
            "cache_ttl_secs": catalog.cache_ttl.as_secs(),
            "max_pages": catalog.max_pages,
        },
    }))
}
