pub mod modules;
mod schema;
pub mod shared;

use modules::{
    anime_list::{AnimeListRepository, AnimeListRepositoryImpl, AnimeListService},
    catalog::CatalogService,
    http::AppState,
    provider::JikanClient,
    users::{UserRepository, UserRepositoryImpl, UserService},
};
use shared::{errors::AppResult, AppConfig, Database};
use std::sync::Arc;

/// Wire repositories and services into the shared handler state
pub fn build_app_state(config: &AppConfig, database: Arc<Database>) -> AppResult<AppState> {
    // Initialize repositories
    let user_repo: Arc<dyn UserRepository> =
        Arc::new(UserRepositoryImpl::new(Arc::clone(&database)));
    let list_repo: Arc<dyn AnimeListRepository> =
        Arc::new(AnimeListRepositoryImpl::new(Arc::clone(&database)));

    // Initialize the Jikan client and catalog
    let jikan = Arc::new(JikanClient::from_config(config)?);
    crate::log_info!(
        "Jikan client ready at {} ({} retries max)",
        jikan.base_url(),
        jikan.retry_policy().max_retries
    );
    let catalog = Arc::new(CatalogService::new(jikan, config.catalog.clone()));

    // Initialize core services
    let users = Arc::new(UserService::new(user_repo));
    let anime_list = Arc::new(AnimeListService::new(list_repo, Arc::clone(&users)));

    Ok(AppState::new(users, anime_list, catalog).with_database(database))
}
