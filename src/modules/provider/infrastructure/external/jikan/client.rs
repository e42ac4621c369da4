use crate::modules::provider::domain::{ExternalRecord, PageResult};
use crate::modules::provider::infrastructure::http_client::{
    HttpTransport, ReqwestTransport, RetryPolicy, TransportError,
};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::dto::{JikanPageResponse, JikanResourceResponse};

const PROVIDER_NAME: &str = "Jikan";
const USER_AGENT: &str = "AnimePulse/1.0";

/// Why a fetch produced no page
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchFailure {
    #[error("request cancelled")]
    Cancelled,

    #[error("gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("upstream answered HTTP {status}")]
    Rejected { status: u16 },
}

/// Decides which non-2xx statuses earn another attempt
type RetryableStatus = fn(u16) -> bool;

/// Paginated endpoints spend the retry budget on every failure
fn any_status(_status: u16) -> bool {
    true
}

/// Single resources give up at once on client errors such as an unknown id
fn transient_status(status: u16) -> bool {
    status == 429 || status >= 500
}

/// Outcome of a single request that did not produce a value
enum AttemptFailure {
    RateLimited,
    Failed(String),
}

impl AttemptFailure {
    fn describe(&self) -> String {
        match self {
            AttemptFailure::RateLimited => "rate limited (HTTP 429)".to_string(),
            AttemptFailure::Failed(reason) => reason.clone(),
        }
    }
}

/// Client for the paginated Jikan v4 API
pub struct JikanClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    retry_policy: RetryPolicy,
}

impl JikanClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry_policy: RetryPolicy::jikan(),
        }
    }

    /// Production client: reqwest transport configured from `config`
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let transport = ReqwestTransport::new(config.http_timeout, USER_AGENT)?;
        Ok(Self::new(config.jikan_base_url.clone(), Arc::new(transport)))
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/<endpoint>` plus the page parameter, joined with `&` when the
    /// endpoint already has a query string
    pub fn page_url(&self, endpoint: &str, page: u32) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}page={}",
            self.resource_url(endpoint),
            separator,
            page
        )
    }

    fn resource_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Fetch one page of `endpoint`.
    ///
    /// Rate limiting and transient failures are retried with exponential backoff.
    /// Once the retry budget is spent the page degrades to empty with no
    /// continuation. The only error returned is [`AppError::Cancelled`].
    pub async fn fetch_page(
        &self,
        endpoint: &str,
        page: u32,
        token: &CancellationToken,
    ) -> AppResult<PageResult> {
        match self.try_fetch_page(endpoint, page, token).await {
            Ok(result) => Ok(result),
            Err(FetchFailure::Cancelled) => Err(AppError::Cancelled),
            Err(failure) => {
                warn!(
                    "{} {} page {}: {}; treating as no more data",
                    PROVIDER_NAME, endpoint, page, failure
                );
                Ok(PageResult::empty())
            }
        }
    }

    /// Same as [`fetch_page`](Self::fetch_page) but reports exhausted retries
    /// instead of hiding them behind an empty page
    pub async fn try_fetch_page(
        &self,
        endpoint: &str,
        page: u32,
        token: &CancellationToken,
    ) -> Result<PageResult, FetchFailure> {
        let url = self.page_url(endpoint, page);
        let response: JikanPageResponse = self.get_with_retries(&url, any_status, token).await?;
        Ok(response.into())
    }

    /// Fetch a single-object endpoint such as `anime/{id}/full`.
    ///
    /// `None` covers "upstream has no such record", a 4xx answer and exhausted
    /// retries. Only 429, 5xx and network failures are retried.
    pub async fn fetch_resource(
        &self,
        endpoint: &str,
        token: &CancellationToken,
    ) -> AppResult<Option<ExternalRecord>> {
        let url = self.resource_url(endpoint);
        match self
            .get_with_retries::<JikanResourceResponse>(&url, transient_status, token)
            .await
        {
            Ok(response) => Ok(response.into_record()),
            Err(FetchFailure::Cancelled) => Err(AppError::Cancelled),
            Err(FetchFailure::Rejected { status }) => {
                debug!("{} {} answered HTTP {}", PROVIDER_NAME, endpoint, status);
                Ok(None)
            }
            Err(exhausted) => {
                warn!("{} {}: {}", PROVIDER_NAME, endpoint, exhausted);
                Ok(None)
            }
        }
    }

    async fn get_with_retries<T>(
        &self,
        url: &str,
        retryable: RetryableStatus,
        token: &CancellationToken,
    ) -> Result<T, FetchFailure>
    where
        T: DeserializeOwned,
    {
        let mut retries: u32 = 0;

        loop {
            if token.is_cancelled() {
                return Err(FetchFailure::Cancelled);
            }

            LogContext::api_call(PROVIDER_NAME, url, "GET", None);
            let started = Instant::now();

            let failure = match self.transport.get(url, token).await {
                Ok(response) if !response.is_success() && !retryable(response.status) => {
                    return Err(FetchFailure::Rejected {
                        status: response.status,
                    });
                }
                Ok(response) if response.is_rate_limited() => AttemptFailure::RateLimited,
                Ok(response) if !response.is_success() => {
                    AttemptFailure::Failed(format!("HTTP {}", response.status))
                }
                Ok(response) => match serde_json::from_str::<T>(&response.body) {
                    Ok(decoded) => {
                        LogContext::api_call(
                            PROVIDER_NAME,
                            url,
                            "OK",
                            Some(started.elapsed().as_millis() as u64),
                        );
                        return Ok(decoded);
                    }
                    Err(e) => AttemptFailure::Failed(format!("Failed to parse response: {}", e)),
                },
                Err(TransportError::Cancelled) => return Err(FetchFailure::Cancelled),
                Err(TransportError::Network(reason)) => AttemptFailure::Failed(reason),
            };

            // A failure seen after the caller gave up is reported as the cancellation it is
            if token.is_cancelled() {
                return Err(FetchFailure::Cancelled);
            }

            if !self.retry_policy.can_retry(retries) {
                return Err(FetchFailure::RetriesExhausted {
                    attempts: retries + 1,
                    last_error: failure.describe(),
                });
            }

            let delay = self.retry_policy.delay_for(retries);
            warn!(
                "{} request to {} failed: {} (attempt {}/{}). Retrying in {:?}",
                PROVIDER_NAME,
                url,
                failure.describe(),
                retries + 1,
                self.retry_policy.max_attempts(),
                delay
            );

            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("{} backoff for {} interrupted by cancellation", PROVIDER_NAME, url);
                    return Err(FetchFailure::Cancelled);
                }
                _ = sleep(delay) => {}
            }

            retries += 1;
        }
    }
}
