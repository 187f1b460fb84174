/// Derive a URL slug from a display name.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-`, and trims leading/trailing dashes:
/// `"Hand-Made & Co."` becomes `"hand-made-co"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Hand-Made & Co."), "hand-made-co");
    }

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("Ceramic Vases"), "ceramic-vases");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  --Woven Baskets--  "), "woven-baskets");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Top 10 Gifts"), "top-10-gifts");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        // Matches the replace-anything-outside-[a-z0-9] rule.
        assert_eq!(slugify("Café Décor"), "caf-d-cor");
    }

    #[test]
    fn test_slugify_is_idempotent_on_slugs() {
        assert_eq!(slugify("hand-made-co"), "hand-made-co");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
