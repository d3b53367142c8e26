//! Service layer error types
//!
//! This module defines errors that can occur in the application service
//! layer, abstracting over the HTTP transport.

use crate::ports::outbound::ApiError;

/// Errors that can occur in submit operations
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// The update API call failed
    Api(ApiError),
    /// Form values were rejected before any request was issued
    InvalidInput(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Api(e) => write!(f, "API error: {}", e),
            ServiceError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        ServiceError::Api(e)
    }
}
