//! Test doubles for outbound ports
//!
//! `MockCharacterStorePort` is generated by mockall on the port trait
//! itself; this module holds the hand-rolled doubles that need recording
//! behavior beyond what an expectation-style mock gives us.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;

use super::{ApiError, ApiPort};

/// Recording `ApiPort` double.
///
/// Captures every PUT (path + serialized body) and returns a programmable
/// outcome, so service tests can assert on the exact wire shape.
#[derive(Clone, Default)]
pub struct RecordingApi {
    puts: Arc<Mutex<Vec<(String, Value)>>>,
    failure: Arc<Mutex<Option<ApiError>>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A double whose every request fails with the given error.
    pub fn failing_with(error: ApiError) -> Self {
        let api = Self::default();
        *api.failure.lock().expect("failure mutex poisoned") = Some(error);
        api
    }

    /// Every PUT issued so far, in order.
    pub fn puts(&self) -> Vec<(String, Value)> {
        self.puts.lock().expect("puts mutex poisoned").clone()
    }
}

#[async_trait::async_trait]
impl ApiPort for RecordingApi {
    async fn put_no_response<B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        if let Some(error) = self.failure.lock().expect("failure mutex poisoned").clone() {
            return Err(error);
        }
        let value = serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        self.puts
            .lock()
            .expect("puts mutex poisoned")
            .push((path.to_string(), value));
        Ok(())
    }
}

/// Shorthand for the transport failure used across unit tests.
pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}
