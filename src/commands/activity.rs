//! Activity Commands
//!
//! POST wrapper for the activity log endpoint.

use gloo_net::http::Request;

use crate::activity::ActivityApi;
use crate::error::SubmitError;
use crate::models::{ActivityRecord, LogActivityResponse};

pub struct HttpActivityApi {
    endpoint: &'static str,
}

impl HttpActivityApi {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

impl ActivityApi for HttpActivityApi {
    /// The body is decoded whatever the HTTP status; its `status` field
    /// decides success.
    async fn log_activity(&self, record: &ActivityRecord) -> Result<LogActivityResponse, SubmitError> {
        let body = serde_json::to_string(record)
            .map_err(|e| SubmitError::Transport(format!("failed to serialize activity: {}", e)))?;

        let response = Request::post(self.endpoint)
            .header("content-type", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Transport(format!("failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        log::debug!("POST {} -> {}", self.endpoint, status);

        let raw = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&raw)
            .map_err(|e| SubmitError::Decode(format!("status {}: {}", status, e)))
    }
}
