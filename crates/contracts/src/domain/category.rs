use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Opaque backend-assigned category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "active" => Some(CategoryStatus::Active),
            "inactive" => Some(CategoryStatus::Inactive),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Reference to a parent category as the API populates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentRef {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
}

/// Category as returned by the backend.
///
/// `parent` is absent for root categories; `product_count` is computed
/// server-side and missing on older documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default)]
    pub status: CategoryStatus,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub seo_title: String,
    #[serde(default)]
    pub seo_description: String,
    #[serde(default)]
    pub product_count: i64,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Reduced shape served by the public categories endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

// ============================================================================
// Submission payload
// ============================================================================

/// Body sent on create and update alike.
///
/// An absent parent is omitted from the JSON entirely; the `"none"`
/// sentinel the form uses never reaches the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<CategoryId>,
    pub status: CategoryStatus,
    pub sort_order: i32,
    pub seo_title: String,
    pub seo_description: String,
}

impl CategoryPayload {
    /// First-error validation of a parsed payload.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Slug is required".into());
        }
        if self.sort_order < 0 {
            return Err("Sort order cannot be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CategoryPayload {
        CategoryPayload {
            name: "Pottery".into(),
            slug: "pottery".into(),
            description: String::new(),
            image: String::new(),
            parent: None,
            status: CategoryStatus::Active,
            sort_order: 0,
            seo_title: String::new(),
            seo_description: String::new(),
        }
    }

    #[test]
    fn test_validate_requires_name() {
        let mut p = payload();
        p.name = "   ".into();
        assert_eq!(p.validate(), Err("Category name is required".to_string()));
    }

    #[test]
    fn test_validate_rejects_negative_sort_order() {
        let mut p = payload();
        p.sort_order = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_absent_parent_is_not_serialized() {
        let value = serde_json::to_value(payload()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("parent"));
        assert_eq!(obj["sortOrder"], 0);
    }

    #[test]
    fn test_present_parent_serializes_as_plain_id() {
        let mut p = payload();
        p.parent = Some(CategoryId::new("661f00aa12"));
        let value = serde_json::to_value(p).unwrap();
        assert_eq!(value["parent"], "661f00aa12");
    }

    #[test]
    fn test_deserialize_populated_category() {
        let json = r#"{
            "_id": "66a1",
            "name": "Mugs",
            "slug": "mugs",
            "status": "inactive",
            "sortOrder": 3,
            "parent": { "_id": "66a0", "name": "Pottery" }
        }"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.id.as_str(), "66a1");
        assert_eq!(cat.status, CategoryStatus::Inactive);
        assert_eq!(cat.parent.as_ref().unwrap().name, "Pottery");
        assert_eq!(cat.product_count, 0);
        assert!(!cat.is_root());
    }
}
