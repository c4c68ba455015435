pub mod product;

pub use product::{Product, Rating};
