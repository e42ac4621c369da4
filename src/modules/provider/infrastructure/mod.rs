pub mod external;
pub mod http_client;

// Re-export commonly used types
pub use external::{FetchFailure, JikanClient};
pub use http_client::{HttpTransport, ReqwestTransport, RetryPolicy, TransportError, TransportResponse};
