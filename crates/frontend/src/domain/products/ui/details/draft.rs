use contracts::domain::category::CategoryId;
use contracts::domain::product::{Product, ProductId, ProductPayload, ProductStatus};

/// String-typed form state for the product dialog.
///
/// Every numeric field is raw text until submit; `parse` converts them
/// and reports the first problem as a user-facing message. Features are
/// one per line, tags comma-separated, matching how the form renders
/// them.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub original_price: String,
    pub rating: String,
    pub category: String,
    pub images: Vec<String>,
    pub stock: String,
    pub sku: String,
    pub status: ProductStatus,
    pub features: String,
    pub tags: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            original_price: String::new(),
            rating: "4".to_string(),
            category: String::new(),
            images: Vec::new(),
            stock: String::new(),
            sku: String::new(),
            status: ProductStatus::Active,
            features: String::new(),
            tags: String::new(),
        }
    }
}

impl ProductDraft {
    /// Seeds the draft from an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            original_price: product
                .original_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            rating: product.rating.to_string(),
            category: product
                .category
                .as_ref()
                .map(|c| c.id.as_str().to_string())
                .unwrap_or_default(),
            images: product.images.clone(),
            stock: product.stock.to_string(),
            sku: product.sku.clone(),
            status: product.status,
            features: product.features.join("\n"),
            tags: product.tags.join(", "),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Turns the draft into a request payload.
    /// An empty original price means "no sale price" and is dropped.
    pub fn parse(&self) -> Result<ProductPayload, String> {
        let price = parse_required_f64(&self.price, "Price")?;
        let original_price = parse_optional_f64(&self.original_price, "Original price")?;
        let rating = parse_required_f64(&self.rating, "Rating")?;
        let stock = parse_required_i32(&self.stock, "Stock")?;

        let payload = ProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            original_price,
            rating,
            category: CategoryId::new(self.category.trim()),
            images: self.images.clone(),
            stock,
            sku: self.sku.trim().to_string(),
            status: self.status,
            features: split_lines(&self.features),
            tags: split_tags(&self.tags),
        };

        payload.validate()?;
        Ok(payload)
    }
}

fn parse_required_f64(raw: &str, field: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", field));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number", field))
}

fn parse_optional_f64(raw: &str, field: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("{} must be a number", field))
}

fn parse_required_i32(raw: &str, field: &str) -> Result<i32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", field));
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| format!("{} must be a whole number", field))
}

/// One feature per line; blank lines are dropped.
fn split_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-separated tags; empty entries are dropped.
fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::CategoryRef;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            name: "Walnut Bowl".to_string(),
            sku: "WB-01".to_string(),
            price: "42.50".to_string(),
            stock: "5".to_string(),
            category: "cat-1".to_string(),
            ..ProductDraft::default()
        }
    }

    fn existing_product() -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Walnut Bowl".to_string(),
            description: "Hand turned".to_string(),
            price: 42.0,
            original_price: Some(55.0),
            rating: 4.5,
            category: Some(CategoryRef {
                id: CategoryId::new("cat-1"),
                name: "Woodwork".to_string(),
            }),
            images: vec!["/uploads/bowl.jpg".to_string()],
            stock: 5,
            sku: "WB-01".to_string(),
            status: ProductStatus::Active,
            features: vec!["Hand carved".to_string(), "Oiled finish".to_string()],
            tags: vec!["wood".to_string(), "kitchen".to_string()],
        }
    }

    #[test]
    fn test_valid_draft_parses() {
        let payload = filled_draft().parse().unwrap();
        assert_eq!(payload.price, 42.5);
        assert_eq!(payload.stock, 5);
        assert_eq!(payload.category, CategoryId::new("cat-1"));
    }

    #[test]
    fn test_empty_price_is_rejected() {
        let mut draft = filled_draft();
        draft.price = String::new();
        assert_eq!(draft.parse(), Err("Price is required".to_string()));
    }

    #[test]
    fn test_unparsable_price_is_rejected() {
        let mut draft = filled_draft();
        draft.price = "abc".to_string();
        assert_eq!(draft.parse(), Err("Price must be a number".to_string()));
    }

    #[test]
    fn test_empty_original_price_is_absent() {
        let payload = filled_draft().parse().unwrap();
        assert!(payload.original_price.is_none());
    }

    #[test]
    fn test_unparsable_original_price_is_rejected() {
        let mut draft = filled_draft();
        draft.original_price = "free".to_string();
        assert_eq!(
            draft.parse(),
            Err("Original price must be a number".to_string())
        );
    }

    #[test]
    fn test_fractional_stock_is_rejected() {
        let mut draft = filled_draft();
        draft.stock = "7.5".to_string();
        assert_eq!(
            draft.parse(),
            Err("Stock must be a whole number".to_string())
        );
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let mut draft = filled_draft();
        draft.category = String::new();
        assert_eq!(draft.parse(), Err("Category is required".to_string()));
    }

    #[test]
    fn test_features_split_on_lines() {
        let mut draft = filled_draft();
        draft.features = "Hand carved\n\n  Oiled finish  \n".to_string();
        let payload = draft.parse().unwrap();
        assert_eq!(payload.features, vec!["Hand carved", "Oiled finish"]);
    }

    #[test]
    fn test_tags_split_on_commas() {
        let mut draft = filled_draft();
        draft.tags = "wood, gift , , handmade".to_string();
        let payload = draft.parse().unwrap();
        assert_eq!(payload.tags, vec!["wood", "gift", "handmade"]);
    }

    #[test]
    fn test_edit_seed_round_trips() {
        let product = existing_product();
        let draft = ProductDraft::from_product(&product);

        assert_eq!(draft.price, "42");
        assert_eq!(draft.original_price, "55");
        assert_eq!(draft.features, "Hand carved\nOiled finish");
        assert_eq!(draft.tags, "wood, kitchen");

        let payload = draft.parse().unwrap();
        assert_eq!(payload.price, 42.0);
        assert_eq!(payload.original_price, Some(55.0));
        assert_eq!(payload.features, product.features);
        assert_eq!(payload.tags, product.tags);
    }
}
