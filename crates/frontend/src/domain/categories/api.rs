use contracts::domain::category::{Category, CategoryId, CategoryPayload, CategorySummary};
use contracts::shared::api::CategoriesResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response};
use crate::system::auth::storage::auth_header;

/// Fetch the full category list for the admin area
pub async fn fetch_admin_categories() -> Result<Vec<Category>, String> {
    let auth_header = auth_header()?;

    let resp = Request::get(&api_url("/api/admin/categories"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        let parsed: CategoriesResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;
        Ok(parsed.categories)
    } else {
        Err(error_from_response(resp).await)
    }
}

/// Fetch the public category list. Served as a bare array, no auth.
pub async fn fetch_category_summaries() -> Result<Vec<CategorySummary>, String> {
    let resp = Request::get(&api_url("/api/categories"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        resp.json::<Vec<CategorySummary>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_from_response(resp).await)
    }
}

/// Create a category
pub async fn create_category(payload: &CategoryPayload) -> Result<(), String> {
    let auth_header = auth_header()?;

    let resp = Request::post(&api_url("/api/admin/categories"))
        .header("Authorization", &auth_header)
        .json(payload)
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

/// Update a category
pub async fn update_category(id: &CategoryId, payload: &CategoryPayload) -> Result<(), String> {
    let auth_header = auth_header()?;

    let resp = Request::put(&api_url(&format!("/api/admin/categories/{}", id.as_str())))
        .header("Authorization", &auth_header)
        .json(payload)
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

/// Delete a category. The response body is ignored; the caller re-fetches
/// the list afterwards.
pub async fn delete_category(id: &CategoryId) -> Result<(), String> {
    let auth_header = auth_header()?;

    let resp = Request::delete(&api_url(&format!("/api/admin/categories/{}", id.as_str())))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(error_from_response(resp).await)
    }
}
