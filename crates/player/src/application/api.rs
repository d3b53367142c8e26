//! Typed `ApiPort` adapter over the object-safe raw boundary
//!
//! The composition root stores a `RawApiPort` as a trait object and wraps
//! it with `Api`, which implements the typed `ApiPort` by doing serde_json
//! conversions at the call site.

use std::sync::Arc;

use serde::Serialize;

use crate::ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

#[async_trait::async_trait]
impl ApiPort for Api {
    async fn put_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        self.raw.put_no_response_json(path, &body_value).await
    }
}
