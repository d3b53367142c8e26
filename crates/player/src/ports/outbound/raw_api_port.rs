//! Raw API Port - Object-safe HTTP boundary
//!
//! The typed `ApiPort` trait is generic over request body types, which makes
//! it not object-safe. Adapters implement `RawApiPort` instead: an
//! object-safe boundary in terms of `serde_json::Value` that can be stored
//! behind `Arc<dyn ...>`. The application layer provides a typed wrapper
//! that implements `ApiPort` on top.

use serde_json::Value;

use super::ApiError;

#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// GET a resource, mapping a 404 to `None`.
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError>;

    /// PUT a JSON body. The response body is ignored.
    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError>;
}
