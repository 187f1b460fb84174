use serde::{Deserialize, Serialize};

use crate::domain::product::ProductId;

/// One line of the client-side cart, persisted as JSON in the `cart` cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: u32,
}

/// Total number of units across all lines; the navbar badge value.
pub fn cart_count(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Order subtotal.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * item.quantity as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            name: format!("item {id}"),
            price,
            image: None,
            quantity,
        }
    }

    #[test]
    fn test_count_sums_quantities() {
        let items = vec![item("a", 10.0, 2), item("b", 5.0, 3)];
        assert_eq!(cart_count(&items), 5);
    }

    #[test]
    fn test_count_of_empty_cart_is_zero() {
        assert_eq!(cart_count(&[]), 0);
    }

    #[test]
    fn test_total_weighs_by_quantity() {
        let items = vec![item("a", 10.0, 2), item("b", 2.5, 4)];
        assert_eq!(cart_total(&items), 30.0);
    }

    #[test]
    fn test_cookie_round_trip() {
        let items = vec![item("a", 12.0, 1)];
        let json = serde_json::to_string(&items).unwrap();
        assert!(json.contains("\"productId\":\"a\""));
        let back: Vec<CartItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, items);
    }
}
