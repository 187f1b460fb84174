//! Shopping cart state, persisted in the `cart` cookie.
//!
//! The cookie holds a JSON array of items so the cart survives reloads
//! and stays readable by the backend during checkout.

use contracts::domain::product::{Product, ProductId};
use contracts::shared::cart::{cart_count, cart_total, CartItem};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const CART_COOKIE: &str = "cart";
const CART_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

#[derive(Clone, Copy)]
pub struct CartService {
    items: RwSignal<Vec<CartItem>>,
}

impl CartService {
    /// Creates the service, hydrating from the cookie when present.
    pub fn new() -> Self {
        let initial = html_document()
            .and_then(|doc| doc.cookie().ok())
            .map(|cookies| parse_cart_cookie(&cookies))
            .unwrap_or_default();
        Self {
            items: RwSignal::new(initial),
        }
    }

    pub fn items(&self) -> Signal<Vec<CartItem>> {
        self.items.into()
    }

    pub fn count(&self) -> Signal<u32> {
        let items = self.items;
        Signal::derive(move || cart_count(&items.get()))
    }

    pub fn total(&self) -> Signal<f64> {
        let items = self.items;
        Signal::derive(move || cart_total(&items.get()))
    }

    /// Adds one unit of the product, merging with an existing line.
    pub fn add(&self, product: &Product) {
        self.items.update(|items| {
            if let Some(line) = items.iter_mut().find(|i| i.product_id == product.id) {
                line.quantity += 1;
            } else {
                items.push(CartItem {
                    product_id: product.id.clone(),
                    name: product.name.clone(),
                    price: product.price,
                    image: product.first_image().map(|s| s.to_string()),
                    quantity: 1,
                });
            }
        });
        self.persist();
    }

    /// Sets the quantity of a line. Zero removes the line.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        self.items.update(|items| {
            if let Some(line) = items.iter_mut().find(|i| &i.product_id == product_id) {
                line.quantity = quantity;
            }
        });
        self.persist();
    }

    pub fn remove(&self, product_id: &ProductId) {
        self.items
            .update(|items| items.retain(|i| &i.product_id != product_id));
        self.persist();
    }

    pub fn clear(&self) {
        self.items.set(Vec::new());
        self.persist();
    }

    fn persist(&self) {
        let Some(doc) = html_document() else {
            return;
        };
        let Ok(json) = serde_json::to_string(&self.items.get_untracked()) else {
            return;
        };
        let cookie = format!(
            "{}={}; path=/; max-age={}",
            CART_COOKIE,
            urlencoding::encode(&json),
            CART_COOKIE_MAX_AGE_SECS
        );
        if let Err(e) = doc.set_cookie(&cookie) {
            log::warn!("Failed to persist cart cookie: {:?}", e);
        }
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartService {
    expect_context::<CartService>()
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Extracts the cart items from a raw `document.cookie` string.
/// A missing or malformed cookie yields an empty cart.
fn parse_cart_cookie(cookies: &str) -> Vec<CartItem> {
    let prefix = format!("{}=", CART_COOKIE);
    let Some(raw) = cookies
        .split(';')
        .map(str::trim)
        .find_map(|c| c.strip_prefix(prefix.as_str()))
    else {
        return Vec::new();
    };

    let decoded = match urlencoding::decode(raw) {
        Ok(value) => value.into_owned(),
        Err(_) => raw.to_string(),
    };

    match serde_json::from_str(&decoded) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Ignoring malformed cart cookie: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_missing_cookie() {
        assert!(parse_cart_cookie("").is_empty());
        assert!(parse_cart_cookie("theme=dark; session=abc").is_empty());
    }

    #[test]
    fn test_parse_plain_json_cookie() {
        let cookies = r#"cart=[{"productId":"p1","name":"Walnut Bowl","price":42.0,"quantity":2}]"#;
        let items = parse_cart_cookie(cookies);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id.as_str(), "p1");
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_parse_percent_encoded_cookie() {
        let json = r#"[{"productId":"p2","name":"Vase","price":19.5,"quantity":1}]"#;
        let cookies = format!("theme=dark; cart={}", urlencoding::encode(json));
        let items = parse_cart_cookie(&cookies);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Vase");
    }

    #[test]
    fn test_parse_malformed_cookie_yields_empty() {
        assert!(parse_cart_cookie("cart=not-json").is_empty());
        assert!(parse_cart_cookie("cart={\"productId\":1}").is_empty());
    }
}
