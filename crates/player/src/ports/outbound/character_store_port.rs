//! Character Store Port - Outbound port for record-store lookups
//!
//! The record store is an external collaborator; the page only performs one
//! point lookup against it. The port returns the raw stored record so the
//! page loader owns the conversion into the plain snapshot it hands to the
//! render layer.
//!
//! The store handle is always injected (`Arc<dyn CharacterStorePort>`),
//! never a process-wide singleton, so the loader stays testable in
//! isolation.

use serde_json::Value;

/// Record-store faults. Not-found is NOT a fault; it is `Ok(None)`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or refused the lookup
    #[error("record store unreachable: {0}")]
    Unreachable(String),
    /// The store returned a record that does not match the snapshot shape
    #[error("record store returned a malformed record: {0}")]
    Malformed(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait CharacterStorePort: Send + Sync {
    /// Point lookup by exact id. `Ok(None)` when no record matches.
    async fn find_by_id(&self, id: i64) -> Result<Option<Value>, StoreError>;
}
