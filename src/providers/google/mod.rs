pub mod drive;
pub mod oauth;
pub mod sheets;

use crate::{
    errors::{AppError, SyncError},
    logging::logger::log_error,
};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

pub fn build_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::Sync(SyncError::from(e)))
}

/// Extracts the human readable message from a Google error body. API errors
/// look like `{"error": {"message": ..}}`, OAuth errors like
/// `{"error": "..", "error_description": ".."}`.
pub fn service_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json["error"]["message"]
        .as_str()
        .or_else(|| json["error_description"].as_str())
        .or_else(|| json["error"].as_str())
        .map(str::to_string)
}

/// Passes successful responses through and turns anything else into a
/// transport error.
pub async fn error_for_response(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = service_message(&body)
        .unwrap_or_else(|| format!("unexpected status code ({})", status));
    log_error(&format!("request to '{}' failed: {}", url, message));
    Err(AppError::Sync(SyncError::Transport(message)))
}

fn transport(e: reqwest::Error) -> AppError {
    AppError::Sync(SyncError::from(e))
}
