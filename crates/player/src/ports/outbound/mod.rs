//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application code to talk to the record store, the
//! update API, and the host platform without depending on concrete
//! implementations.

pub mod api_port;
pub mod character_store_port;
pub mod platform;
pub mod raw_api_port;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api_port::{ApiError, ApiPort};
pub use character_store_port::{CharacterStorePort, StoreError};
pub use platform::{DialogProvider, DocumentProvider};
pub use raw_api_port::RawApiPort;
