use crate::modules::anime_list::AnimeListService;
use crate::modules::catalog::CatalogService;
use crate::modules::users::UserService;
use crate::shared::Database;
use std::sync::Arc;

/// Shared handler state. Cloned per request, every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub anime_list: Arc<AnimeListService>,
    pub catalog: Arc<CatalogService>,
    /// Absent when the router runs without a database (tests)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(
        users: Arc<UserService>,
        anime_list: Arc<AnimeListService>,
        catalog: Arc<CatalogService>,
    ) -> Self {
        Self {
            users,
            anime_list,
            catalog,
            database: None,
        }
    }

    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }
}
