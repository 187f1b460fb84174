//! Route-level pages of the storefront and the admin area.

pub mod admin;
pub mod cart;
pub mod home;
pub mod not_found;
pub mod products;
