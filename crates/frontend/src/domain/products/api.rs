use contracts::domain::product::{Product, ProductId, ProductPayload};
use contracts::shared::api::ProductsResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response};
use crate::system::auth::storage::auth_header;

/// Fetch the full product list for the admin area
pub async fn fetch_admin_products() -> Result<Vec<Product>, String> {
    let auth_header = auth_header()?;

    let resp = Request::get(&api_url("/api/admin/products"))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        let parsed: ProductsResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;
        Ok(parsed.products)
    } else {
        Err(error_from_response(resp).await)
    }
}

/// Fetch the storefront product list. No auth.
pub async fn fetch_public_products() -> Result<Vec<Product>, String> {
    let resp = Request::get(&api_url("/api/products"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        let parsed: ProductsResponse = resp
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;
        Ok(parsed.products)
    } else {
        Err(error_from_response(resp).await)
    }
}

/// Create a product
pub async fn create_product(payload: &ProductPayload) -> Result<(), String> {
    let auth_header = auth_header()?;

    let resp = Request::post(&api_url("/api/admin/products"))
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

/// Update a product
pub async fn update_product(id: &ProductId, payload: &ProductPayload) -> Result<(), String> {
    let auth_header = auth_header()?;

    let resp = Request::put(&api_url(&format!("/api/admin/products/{}", id.as_str())))
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

/// Delete a product. The response body is ignored; the caller re-fetches
/// the list afterwards.
pub async fn delete_product(id: &ProductId) -> Result<(), String> {
    let auth_header = auth_header()?;

    let resp = Request::delete(&api_url(&format!("/api/admin/products/{}", id.as_str())))
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
