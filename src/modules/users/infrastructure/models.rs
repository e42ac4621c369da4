use crate::modules::users::domain::User;
use crate::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub fullname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

// For inserting new users (id and created_at come from column defaults)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub fullname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

// Full replacement of the editable columns; `None` writes NULL
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct UserChangeset {
    pub username: String,
    pub fullname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            fullname: model.fullname,
            avatar: model.avatar,
            bio: model.bio,
            created_at: model.created_at,
        }
    }
}
