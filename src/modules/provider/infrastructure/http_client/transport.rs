//! HTTP transport used by the provider clients
//!
//! The trait is the seam between retry logic and the network: the Jikan client
//! only sees a status code and a body, which keeps its retry loop testable
//! without a live server.

use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client;
use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The caller's token fired while the request was in flight
    #[error("request cancelled")]
    Cancelled,

    /// Connect, timeout, TLS or body read failure
    #[error("network error: {0}")]
    Network(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET. Implementations must stop early with `Cancelled` once `token` fires.
    async fn get(
        &self,
        url: &str,
        token: &CancellationToken,
    ) -> Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport with a client-side request rate limit
pub struct ReqwestTransport {
    client: Client,
    rate_limiter: DefaultDirectRateLimiter,
}

impl ReqwestTransport {
    /// Jikan allows roughly three requests per second
    pub const JIKAN_REQUESTS_PER_SECOND: u32 = 3;

    pub fn new(timeout: Duration, user_agent: &str) -> AppResult<Self> {
        Self::with_rate(timeout, user_agent, Self::JIKAN_REQUESTS_PER_SECOND)
    }

    pub fn with_rate(timeout: Duration, user_agent: &str, requests_per_second: u32) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        let per_second = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);

        Ok(Self {
            client,
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
        })
    }

    async fn send(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.rate_limiter.until_ready().await;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read body: {}", e)))?;

        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        token: &CancellationToken,
    ) -> Result<TransportResponse, TransportError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Aborting in-flight request to {}", url);
                Err(TransportError::Cancelled)
            }
            result = self.send(url) => result,
        }
    }
}
