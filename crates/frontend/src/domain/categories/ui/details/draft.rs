use contracts::domain::category::{Category, CategoryId, CategoryPayload, CategoryStatus};
use contracts::shared::slug::slugify;

/// Sentinel value the parent `<select>` uses for "no parent".
pub const NO_PARENT: &str = "none";

/// String-typed form state for the category dialog.
///
/// Numeric fields stay raw text until submit so typing is never blocked;
/// `parse` turns the draft into a payload and reports the first problem.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryDraft {
    pub id: Option<CategoryId>,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub parent: String,
    pub status: CategoryStatus,
    pub sort_order: String,
    pub seo_title: String,
    pub seo_description: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            image: String::new(),
            parent: NO_PARENT.to_string(),
            status: CategoryStatus::Active,
            sort_order: "0".to_string(),
            seo_title: String::new(),
            seo_description: String::new(),
        }
    }
}

impl CategoryDraft {
    /// Seeds the draft from an existing category for editing.
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            image: category.image.clone().unwrap_or_default(),
            parent: category
                .parent
                .as_ref()
                .map(|p| p.id.as_str().to_string())
                .unwrap_or_else(|| NO_PARENT.to_string()),
            status: category.status,
            sort_order: category.sort_order.to_string(),
            seo_title: category.seo_title.clone(),
            seo_description: category.seo_description.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Applies a name edit. In create mode the slug follows the name;
    /// editing an existing category never touches the stored slug.
    pub fn apply_name(&mut self, name: String) {
        if !self.is_edit() {
            self.slug = slugify(&name);
        }
        self.name = name;
    }

    /// Turns the draft into a request payload.
    /// The `"none"` parent sentinel maps to an absent parent.
    pub fn parse(&self) -> Result<CategoryPayload, String> {
        let sort_order = parse_sort_order(&self.sort_order)?;

        let parent = if self.parent == NO_PARENT || self.parent.is_empty() {
            None
        } else {
            Some(CategoryId::new(self.parent.clone()))
        };

        let payload = CategoryPayload {
            name: self.name.trim().to_string(),
            slug: self.slug.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.clone(),
            parent,
            status: self.status,
            sort_order,
            seo_title: self.seo_title.trim().to_string(),
            seo_description: self.seo_description.trim().to_string(),
        };

        payload.validate()?;
        Ok(payload)
    }
}

/// An empty sort order falls back to 0; anything else must parse.
fn parse_sort_order(raw: &str) -> Result<i32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| "Sort order must be a whole number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::category::ParentRef;

    fn existing_category() -> Category {
        Category {
            id: CategoryId::new("cat-1"),
            name: "Woodwork".to_string(),
            slug: "woodwork".to_string(),
            description: String::new(),
            image: None,
            parent: Some(ParentRef {
                id: CategoryId::new("cat-0"),
                name: "Crafts".to_string(),
            }),
            status: CategoryStatus::Active,
            sort_order: 3,
            seo_title: String::new(),
            seo_description: String::new(),
            product_count: 7,
        }
    }

    #[test]
    fn test_create_mode_derives_slug_from_name() {
        let mut draft = CategoryDraft::default();
        draft.apply_name("Hand-Made & Co.".to_string());
        assert_eq!(draft.slug, "hand-made-co");
    }

    #[test]
    fn test_edit_mode_never_mutates_slug() {
        let mut draft = CategoryDraft::from_category(&existing_category());
        draft.apply_name("Fine Woodwork".to_string());
        assert_eq!(draft.name, "Fine Woodwork");
        assert_eq!(draft.slug, "woodwork");
    }

    #[test]
    fn test_from_category_seeds_parent_id() {
        let draft = CategoryDraft::from_category(&existing_category());
        assert_eq!(draft.parent, "cat-0");
        assert_eq!(draft.sort_order, "3");
    }

    #[test]
    fn test_none_sentinel_maps_to_absent_parent() {
        let mut draft = CategoryDraft::default();
        draft.apply_name("Pottery".to_string());
        draft.parent = NO_PARENT.to_string();

        let payload = draft.parse().unwrap();
        assert!(payload.parent.is_none());
    }

    #[test]
    fn test_selected_parent_is_kept() {
        let mut draft = CategoryDraft::default();
        draft.apply_name("Pottery".to_string());
        draft.parent = "cat-9".to_string();

        let payload = draft.parse().unwrap();
        assert_eq!(payload.parent, Some(CategoryId::new("cat-9")));
    }

    #[test]
    fn test_empty_sort_order_defaults_to_zero() {
        let mut draft = CategoryDraft::default();
        draft.apply_name("Pottery".to_string());
        draft.sort_order = "   ".to_string();

        let payload = draft.parse().unwrap();
        assert_eq!(payload.sort_order, 0);
    }

    #[test]
    fn test_unparsable_sort_order_is_rejected() {
        let mut draft = CategoryDraft::default();
        draft.apply_name("Pottery".to_string());
        draft.sort_order = "abc".to_string();

        assert_eq!(
            draft.parse(),
            Err("Sort order must be a whole number".to_string())
        );
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let draft = CategoryDraft::default();
        assert_eq!(
            draft.parse(),
            Err("Category name is required".to_string())
        );
    }
}
