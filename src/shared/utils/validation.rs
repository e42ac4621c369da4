use regex::Regex;
use std::sync::LazyLock;

use crate::shared::errors::AppError;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("username pattern compiles"));

pub struct Validator;

impl Validator {
    pub fn validate_username(username: &str) -> Result<(), AppError> {
        if username.is_empty() {
            return Err(AppError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }
        if username.chars().count() > 50 {
            return Err(AppError::ValidationError(
                "Username too long (max 50 characters)".to_string(),
            ));
        }

        if !USERNAME_PATTERN.is_match(username) {
            return Err(AppError::ValidationError(
                "Username may only contain letters, digits, '_', '.' and '-'".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_fullname(fullname: &str) -> Result<(), AppError> {
        if fullname.chars().count() > 100 {
            return Err(AppError::ValidationError(
                "Full name too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_bio(bio: &str) -> Result<(), AppError> {
        if bio.chars().count() > 500 {
            return Err(AppError::ValidationError(
                "Bio too long (max 500 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_avatar_url(avatar: &str) -> Result<(), AppError> {
        if !avatar.starts_with("http://") && !avatar.starts_with("https://") {
            return Err(AppError::ValidationError(
                "Avatar must be an http(s) URL".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_user_score(score: i32) -> Result<(), AppError> {
        if !(1..=10).contains(&score) {
            return Err(AppError::ValidationError(
                "Score must be between 1 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_episodes_watched(episodes: i32) -> Result<(), AppError> {
        if episodes < 0 {
            return Err(AppError::ValidationError(
                "Episodes watched cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_jikan_id(jikan_id: i64) -> Result<(), AppError> {
        if jikan_id <= 0 {
            return Err(AppError::ValidationError(
                "Jikan ID must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_anime_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.chars().count() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(Validator::validate_username("kaguya_01").is_ok());
        assert!(Validator::validate_username("a.b-c").is_ok());
        assert!(Validator::validate_username("").is_err());
        assert!(Validator::validate_username("has space").is_err());
        assert!(Validator::validate_username(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_user_score_bounds() {
        assert!(Validator::validate_user_score(1).is_ok());
        assert!(Validator::validate_user_score(10).is_ok());
        assert!(Validator::validate_user_score(0).is_err());
        assert!(Validator::validate_user_score(11).is_err());
    }

    #[test]
    fn test_avatar_must_be_http() {
        assert!(Validator::validate_avatar_url("https://cdn.example/a.png").is_ok());
        assert!(Validator::validate_avatar_url("ftp://cdn.example/a.png").is_err());
    }

    #[test]
    fn test_title_limit_counts_characters() {
        assert!(Validator::validate_anime_title(&"進".repeat(255)).is_ok());
        assert!(Validator::validate_anime_title(&"進".repeat(256)).is_err());
        assert!(Validator::validate_anime_title("   ").is_err());
    }

    #[test]
    fn test_jikan_id_and_episodes() {
        assert!(Validator::validate_jikan_id(5114).is_ok());
        assert!(Validator::validate_jikan_id(0).is_err());
        assert!(Validator::validate_episodes_watched(0).is_ok());
        assert!(Validator::validate_episodes_watched(-1).is_err());
    }
}
