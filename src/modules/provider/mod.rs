//! External data provider (Jikan v4)
//!
//! Paginated fetching with exponential-backoff retry and cooperative
//! cancellation. Everything upstream-specific lives here; the catalog module
//! only sees [`PageResult`]s.

pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{ExternalRecord, PageResult};
pub use infrastructure::{
    FetchFailure, HttpTransport, JikanClient, ReqwestTransport, RetryPolicy, TransportError,
    TransportResponse,
};
