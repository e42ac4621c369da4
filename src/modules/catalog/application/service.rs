use crate::modules::catalog::domain::{AnimeSummary, SeasonEntry};
use crate::modules::catalog::infrastructure::{CacheStats, CatalogCache};
use crate::modules::provider::{ExternalRecord, JikanClient};
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use std::sync::Arc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

const CATALOG_ENDPOINT: &str = "anime";
const SEASON_ENDPOINT: &str = "seasons/now";
const SEASON_LIMIT: usize = 20;

pub struct CatalogService {
    client: Arc<JikanClient>,
    cache: Arc<CatalogCache>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(client: Arc<JikanClient>, config: CatalogConfig) -> Self {
        let cache = Arc::new(CatalogCache::new(config.cache_ttl));
        Self {
            client,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Walk `endpoint` from page 1 until the upstream reports no next page or
    /// `max_pages` pages were read, pausing `page_delay` between requests.
    pub async fn fetch_all_pages(
        &self,
        endpoint: &str,
        token: &CancellationToken,
    ) -> AppResult<Vec<ExternalRecord>> {
        let max_pages = self.config.max_pages;
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let result = self.client.fetch_page(endpoint, page, token).await?;
            LogContext::page_progress(endpoint, page, max_pages, result.len());

            let has_next_page = result.has_next_page;
            records.extend(result.items);

            if !has_next_page || page >= max_pages {
                break;
            }

            tokio::select! {
                biased;
                _ = token.cancelled() => return Err(AppError::Cancelled),
                _ = sleep(self.config.page_delay) => {}
            }

            page += 1;
        }

        log_debug!(
            "Aggregated {} records from {} ({} pages)",
            records.len(),
            endpoint,
            page
        );
        Ok(records)
    }

    /// Aggregated catalog, served from cache while fresh
    pub async fn public_catalog(&self, token: &CancellationToken) -> AppResult<Vec<AnimeSummary>> {
        if let Some(cached) = self.cache.get(CATALOG_ENDPOINT) {
            log_debug!("Serving {} catalog entries from cache", cached.len());
            return Ok(cached);
        }

        let timer = TimedOperation::new("public_catalog");
        let records = self.fetch_all_pages(CATALOG_ENDPOINT, token).await?;
        let summaries = AnimeSummary::from_records(&records);

        // An empty aggregate usually means the upstream was unavailable
        if summaries.is_empty() {
            timer.finish_with_info("empty result, not cached");
        } else {
            self.cache.insert(CATALOG_ENDPOINT, summaries.clone());
            timer.finish_with_info(&format!("{} entries cached", summaries.len()));
        }

        Ok(summaries)
    }

    pub async fn search(
        &self,
        query: &str,
        token: &CancellationToken,
    ) -> AppResult<Vec<AnimeSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let endpoint = format!("{}?q={}", CATALOG_ENDPOINT, urlencoding::encode(query));
        let page = self.client.fetch_page(&endpoint, 1, token).await?;

        log_info!("Search '{}' matched {} records", query, page.len());
        Ok(AnimeSummary::from_records(&page.items))
    }

    pub async fn current_season(&self, token: &CancellationToken) -> AppResult<Vec<SeasonEntry>> {
        let page = self.client.fetch_page(SEASON_ENDPOINT, 1, token).await?;

        Ok(page
            .items
            .iter()
            .filter_map(SeasonEntry::from_record)
            .take(SEASON_LIMIT)
            .collect())
    }

    /// Full Jikan record for one anime
    pub async fn anime_detail(
        &self,
        jikan_id: i64,
        token: &CancellationToken,
    ) -> AppResult<ExternalRecord> {
        Validator::validate_jikan_id(jikan_id)?;

        let endpoint = format!("{}/{}/full", CATALOG_ENDPOINT, jikan_id);
        self.client
            .fetch_resource(&endpoint, token)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Anime {} not found", jikan_id)))
    }

    pub fn invalidate_cache(&self) {
        self.cache.clear();
        log_info!("Catalog cache invalidated");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
