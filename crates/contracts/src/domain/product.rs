use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryId;

// ============================================================================
// ID Type
// ============================================================================

/// Opaque backend-assigned product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    OutOfStock,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            "out_of_stock" => Some(ProductStatus::OutOfStock),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Reference to the owning category as the API populates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
}

/// Product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.status != ProductStatus::OutOfStock && self.stock > 0
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// ============================================================================
// Submission payload
// ============================================================================

/// Body sent on create and update alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub rating: f64,
    pub category: CategoryId,
    pub images: Vec<String>,
    pub stock: i32,
    pub sku: String,
    pub status: ProductStatus,
    pub features: Vec<String>,
    pub tags: Vec<String>,
}

impl ProductPayload {
    /// First-error validation of a parsed payload.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU is required".into());
        }
        if self.category.is_empty() {
            return Err("Category is required".into());
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err("Price must be greater than zero".into());
        }
        if let Some(original) = self.original_price {
            if !original.is_finite() || original <= 0.0 {
                return Err("Original price must be greater than zero".into());
            }
        }
        if self.stock < 0 {
            return Err("Stock cannot be negative".into());
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err("Rating must be between 0 and 5".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ProductPayload {
        ProductPayload {
            name: "Walnut bowl".into(),
            description: String::new(),
            price: 42.5,
            original_price: None,
            rating: 4.0,
            category: CategoryId::new("66a0"),
            images: vec![],
            stock: 5,
            sku: "WB-01".into(),
            status: ProductStatus::Active,
            features: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn test_validate_requires_category() {
        let mut p = payload();
        p.category = CategoryId::new("");
        assert_eq!(p.validate(), Err("Category is required".to_string()));
    }

    #[test]
    fn test_validate_rejects_zero_price() {
        let mut p = payload();
        p.price = 0.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let mut p = payload();
        p.rating = 5.5;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_absent_original_price_is_not_serialized() {
        let value = serde_json::to_value(payload()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("originalPrice"));
        assert_eq!(obj["status"], "active");
    }

    #[test]
    fn test_deserialize_sparse_product() {
        let json = r#"{
            "_id": "77b1",
            "name": "Jute rug",
            "price": 89.0,
            "status": "out_of_stock",
            "category": { "_id": "66a0", "name": "Textiles" }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.status, ProductStatus::OutOfStock);
        assert_eq!(product.category_name(), "Textiles");
        assert!(product.images.is_empty());
        assert!(!product.in_stock());
    }
}
