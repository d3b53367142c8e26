//! HTTP adapter for the tracker REST API
//!
//! Implements the object-safe `RawApiPort` with reqwest. Paths are joined
//! onto a base URL configured once at startup.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

pub struct ApiAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }

        let value = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Ok(Some(value))
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }

        // The update endpoint's response body carries no contract; drop it.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod url_tests {
        use super::*;

        #[test]
        fn trailing_slash_on_the_base_url_is_normalized() {
            let adapter = ApiAdapter::new("http://localhost:3000/api/");
            assert_eq!(adapter.url("/character/7"), "http://localhost:3000/api/character/7");
        }

        #[test]
        fn base_url_without_trailing_slash_is_used_as_is() {
            let adapter = ApiAdapter::new("http://localhost:3000/api");
            assert_eq!(adapter.url("/character/7"), "http://localhost:3000/api/character/7");
        }
    }
}
