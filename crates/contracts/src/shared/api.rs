use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::system::feedback::Feedback;

/// Envelope of the admin categories listing.
///
/// The collection field defaults to empty so a missing or null key on the
/// wire degrades to no rows instead of a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Envelope of the product listings (admin and public).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Envelope of the feedback listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedbacksResponse {
    #[serde(default)]
    pub feedbacks: Vec<Feedback>,
}

/// Result of a successful image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Error body every endpoint agrees on for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collection_defaults_to_empty() {
        let parsed: CategoriesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.categories.is_empty());
    }

    #[test]
    fn test_error_response_tolerates_bare_object() {
        let parsed: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.error, None);
    }
}
