pub mod draft;
pub mod products;
