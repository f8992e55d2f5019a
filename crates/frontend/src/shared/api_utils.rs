//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and posting submissions.

use crate::shared::scs::SubmissionError;
use contracts::usecases::common::UseCaseError;
use gloo_net::http::Request;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location and the
/// configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(port: u16, path: &str) -> String {
    format!("{}{}", api_base(port), path)
}

/// POST a JSON body; any 2xx is success
pub async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<(), SubmissionError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| SubmissionError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(rejection(status, &text))
}

/// Map a non-2xx response to a user-facing error, preferring the backend message
pub fn rejection(status: u16, body: &str) -> SubmissionError {
    let message = serde_json::from_str::<UseCaseError>(body)
        .map(|err| err.message)
        .unwrap_or_else(|_| format!("HTTP {status}"));
    SubmissionError::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_uses_backend_message() {
        let body = r#"{"code":"VALIDATION_ERROR","message":"market closed"}"#;
        assert_eq!(
            rejection(422, body).to_string(),
            "market closed"
        );
    }

    #[test]
    fn test_rejection_falls_back_on_plain_body() {
        assert_eq!(
            rejection(502, "Bad Gateway"),
            SubmissionError::Rejected {
                status: 502,
                message: "HTTP 502".to_string()
            }
        );
    }
}
