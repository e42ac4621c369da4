use crate::modules::anime_list::domain::{AnimeListEntry, WatchStatus};
use crate::schema::users_anime_list;
use crate::shared::errors::{AppError, AppResult};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = users_anime_list)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnimeListModel {
    pub user_id: Uuid,
    pub anime_id: i64,
    pub status: String,
    pub episodes_watched: i32,
    pub user_score: Option<i32>,
    pub title: String,
    pub picture: Option<String>,
    pub is_favorite: bool,
}

// For inserting or overwriting a row (the key columns are left out of the changeset)
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = users_anime_list)]
#[diesel(primary_key(user_id, anime_id))]
#[diesel(treat_none_as_null = true)]
pub struct NewAnimeListEntry {
    pub user_id: Uuid,
    pub anime_id: i64,
    pub status: String,
    pub episodes_watched: i32,
    pub user_score: Option<i32>,
    pub title: String,
    pub picture: Option<String>,
    pub is_favorite: bool,
}

// Progress edit; clearing the score writes NULL
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = users_anime_list)]
#[diesel(treat_none_as_null = true)]
pub struct ProgressChangeset {
    pub status: String,
    pub episodes_watched: i32,
    pub user_score: Option<i32>,
}

impl TryFrom<AnimeListModel> for AnimeListEntry {
    type Error = AppError;

    fn try_from(model: AnimeListModel) -> AppResult<Self> {
        let status = model.status.parse::<WatchStatus>().map_err(|_| {
            AppError::DatabaseError(format!(
                "Invalid status '{}' stored for anime {}",
                model.status, model.anime_id
            ))
        })?;

        Ok(Self {
            user_id: model.user_id,
            anime_id: model.anime_id,
            status,
            episodes_watched: model.episodes_watched,
            user_score: model.user_score,
            title: model.title,
            picture: model.picture,
            is_favorite: model.is_favorite,
        })
    }
}

impl From<&AnimeListEntry> for NewAnimeListEntry {
    fn from(entry: &AnimeListEntry) -> Self {
        Self {
            user_id: entry.user_id,
            anime_id: entry.anime_id,
            status: entry.status.as_str().to_string(),
            episodes_watched: entry.episodes_watched,
            user_score: entry.user_score,
            title: entry.title.clone(),
            picture: entry.picture.clone(),
            is_favorite: entry.is_favorite,
        }
    }
}

pub fn to_entries(models: Vec<AnimeListModel>) -> AppResult<Vec<AnimeListEntry>> {
    models.into_iter().map(AnimeListEntry::try_from).collect()
}
