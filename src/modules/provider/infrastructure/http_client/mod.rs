pub mod retry_policy;
pub mod transport;

pub use retry_policy::RetryPolicy;
pub use transport::{HttpTransport, ReqwestTransport, TransportError, TransportResponse};
