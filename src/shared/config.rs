//! Runtime configuration loaded from the environment (and `.env` via dotenvy).

use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

pub const DEFAULT_JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub jikan_base_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub http_timeout: Duration,
    pub catalog: CatalogConfig,
}

/// Tuning for the public catalog aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Upper bound on pages fetched per aggregation
    pub max_pages: u32,
    /// Pause between consecutive page requests
    pub page_delay: Duration,
    /// How long an aggregated catalog stays fresh
    pub cache_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_pages: 5,
            page_delay: Duration::from_millis(1500),
            cache_ttl: Duration::from_secs(3600),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            jikan_base_url: DEFAULT_JIKAN_BASE_URL.to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            http_timeout: Duration::from_secs(30),
            catalog: CatalogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog = CatalogConfig {
            max_pages: parse_or(&lookup, "CATALOG_MAX_PAGES", defaults.catalog.max_pages)?,
            page_delay: Duration::from_millis(parse_or(
                &lookup,
                "CATALOG_PAGE_DELAY_MS",
                defaults.catalog.page_delay.as_millis() as u64,
            )?),
            cache_ttl: Duration::from_secs(parse_or(
                &lookup,
                "CATALOG_CACHE_TTL_SECS",
                defaults.catalog.cache_ttl.as_secs(),
            )?),
        };

        if catalog.max_pages == 0 {
            return Err(AppError::InvalidInput(
                "CATALOG_MAX_PAGES must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            jikan_base_url: lookup("JIKAN_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.jikan_base_url),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port)?,
            http_timeout: Duration::from_secs(parse_or(
                &lookup,
                "HTTP_TIMEOUT_SECS",
                defaults.http_timeout.as_secs(),
            )?),
            catalog,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn require_database_url(&self) -> AppResult<&str> {
        self.database_url.as_deref().ok_or_else(|| {
            AppError::DatabaseError("DATABASE_URL environment variable not found".to_string())
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::InvalidInput(format!("{} has invalid value '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}
