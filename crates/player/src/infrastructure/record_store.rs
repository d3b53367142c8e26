//! Record-store adapter backed by the tracker REST surface
//!
//! The production record store is reached through the same API host as the
//! update endpoint: one GET per lookup, with a 404 mapped to not-found.
//! Swapping the backing store only requires another `CharacterStorePort`
//! implementation; the loader never sees the transport.

use std::sync::Arc;

use serde_json::Value;

use crate::ports::outbound::{CharacterStorePort, RawApiPort, StoreError};

pub struct HttpCharacterStore {
    api: Arc<dyn RawApiPort>,
}

impl HttpCharacterStore {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl CharacterStorePort for HttpCharacterStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Value>, StoreError> {
        self.api
            .get_optional_json(&format!("/character/{id}"))
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))
    }
}
