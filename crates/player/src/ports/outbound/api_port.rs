//! Typed API port for REST operations against the tracker backend

use serde::Serialize;

/// Errors that can occur at the HTTP boundary
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("request failed: {0}")]
    RequestFailed(String),
    /// The server answered with a non-success status
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    /// The request body could not be serialized
    #[error("failed to serialize request body: {0}")]
    SerializeError(String),
}

/// Typed REST port used by application services.
///
/// Generic over the body type, so not object-safe; services that need a
/// trait object should hold an `Arc<dyn RawApiPort>` instead.
#[async_trait::async_trait]
pub trait ApiPort: Clone + Send + Sync + 'static {
    /// PUT a request body, discarding whatever the server responds with.
    async fn put_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>;
}
