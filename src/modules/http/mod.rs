//! REST surface over the users, anime list and catalog services

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error_response;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use shutdown::shutdown_signal;
pub use state::AppState;

/// Build the API router
///
/// # Routes
///
/// ## Users
/// - `GET /users`, `POST /users`
/// - `GET /users/:id`, `PUT /users/:id`, `DELETE /users/:id`
///
/// ## Anime list
/// - `GET /users/:id/list`, `POST /users/:id/list`
/// - `GET|PUT|DELETE /users/:id/list/:anime_id`
/// - `PUT /users/:id/list/:anime_id/favorite`
///
/// ## Catalog
/// - `GET /anime`, `GET /anime/search?q=`, `GET /anime/season/now`, `GET /anime/:jikan_id`
/// - `DELETE /anime/cache`
///
/// ## System
/// - `GET /`, `GET /health`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // System
        .route("/", get(routes::root))
        .route("/health", get(routes::health_check))
        // Users
        .route("/users", get(routes::list_users).post(routes::create_user))
        .route(
            "/users/:id",
            get(routes::get_user)
                .put(routes::update_user)
                .delete(routes::delete_user),
        )
        // Anime list
        .route(
            "/users/:id/list",
            get(routes::get_list).post(routes::add_list_item),
        )
        .route(
            "/users/:id/list/:anime_id",
            get(routes::check_list_item)
                .put(routes::update_list_item)
                .delete(routes::remove_list_item),
        )
        .route(
            "/users/:id/list/:anime_id/favorite",
            put(routes::set_favorite),
        )
        // Catalog
        .route("/anime", get(routes::public_catalog))
        .route("/anime/search", get(routes::search_anime))
        .route("/anime/season/now", get(routes::current_season))
        .route("/anime/cache", delete(routes::invalidate_catalog_cache))
        .route("/anime/:jikan_id", get(routes::anime_detail))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
