use contracts::shared::api::FeedbacksResponse;
use contracts::system::feedback::{Feedback, NewFeedback};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response};
use crate::system::auth::storage::auth_header;

/// Fetch all submitted feedback for the admin area
pub async fn fetch_feedbacks() -> Result<Vec<Feedback>, String> {
    let auth_header = auth_header()?;

    let resp = Request::get(&api_url("/api/feedback"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        let parsed: FeedbacksResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;
        Ok(parsed.feedbacks)
    } else {
        Err(error_from_response(resp).await)
    }
}

/// Submit a feedback message. Open to anyone, no auth.
pub async fn submit_feedback(message: String) -> Result<(), String> {
    let body = NewFeedback { message };

    let resp = Request::post(&api_url("/api/feedback"))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(error_from_response(resp).await)
    }
}
