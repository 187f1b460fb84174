pub mod categories;
pub mod feedback;
pub mod products;
