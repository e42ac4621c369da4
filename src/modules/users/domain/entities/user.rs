use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub fullname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateUser {
    pub username: String,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Body of `PUT /users/{id}`. Replaces every profile field; omitted optional
/// fields are cleared.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateUser {
    pub username: String,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl CreateUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            fullname: None,
            avatar: None,
            bio: None,
        }
    }

    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = Some(fullname.into());
        self
    }

    /// Trim text fields and turn blank optionals into `None`
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            fullname: non_blank(self.fullname),
            avatar: non_blank(self.avatar),
            bio: non_blank(self.bio),
        }
    }
}

impl UpdateUser {
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            fullname: non_blank(self.fullname),
            avatar: non_blank(self.avatar),
            bio: non_blank(self.bio),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
