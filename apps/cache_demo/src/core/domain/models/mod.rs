pub mod cache_names;
pub mod catalog;

pub use self::catalog::{Order, Product, User};
