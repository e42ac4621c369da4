/// Service and router builders for the integration tests
use super::repositories::in_memory_repositories;
use super::transport::ScriptedTransport;
use animepulse::modules::anime_list::AnimeListService;
use animepulse::modules::catalog::CatalogService;
use animepulse::modules::http::{create_router, AppState};
use animepulse::modules::provider::{JikanClient, RetryPolicy};
use animepulse::modules::users::UserService;
use animepulse::shared::CatalogConfig;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const TEST_BASE_URL: &str = "https://jikan.test/v4";

/// Jikan client over `transport` with the production retry schedule
pub fn jikan_client(transport: Arc<ScriptedTransport>) -> JikanClient {
    JikanClient::new(TEST_BASE_URL, transport)
}

/// Same budget as production but millisecond backoff
pub fn fast_jikan_client(transport: Arc<ScriptedTransport>) -> JikanClient {
    jikan_client(transport)
        .with_retry_policy(RetryPolicy::jikan().with_base_delay(Duration::from_millis(1)))
}

pub fn fast_catalog_config() -> CatalogConfig {
    CatalogConfig {
        page_delay: Duration::ZERO,
        ..CatalogConfig::default()
    }
}

pub fn test_state(transport: Arc<ScriptedTransport>) -> AppState {
    state_with_client(fast_jikan_client(transport))
}

/// Handler state over in-memory repositories and the given Jikan client
pub fn state_with_client(client: JikanClient) -> AppState {
    let (user_repo, list_repo) = in_memory_repositories();
    let catalog = CatalogService::new(Arc::new(client), fast_catalog_config());

    let users = Arc::new(UserService::new(user_repo));

    AppState::new(
        Arc::clone(&users),
        Arc::new(AnimeListService::new(list_repo, users)),
        Arc::new(catalog),
    )
}

pub fn test_router(transport: Arc<ScriptedTransport>) -> Router {
    create_router(test_state(transport))
}

pub fn router_with_client(client: JikanClient) -> Router {
    create_router(state_with_client(client))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
