pub mod product_types;
pub mod products;
