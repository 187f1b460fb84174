//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and decoding the
//! uniform failure body the backend sends on non-2xx responses.

use contracts::shared::api::ErrorResponse;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extract the failure message from a non-2xx response.
///
/// Every endpoint agrees on a JSON `{ "error": "..." }` body; when it is
/// missing or unreadable the HTTP status becomes the message.
pub async fn error_from_response(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    if let Ok(body) = resp.json::<ErrorResponse>().await {
        if let Some(message) = body.error {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }
    format!("HTTP {}", status)
}
