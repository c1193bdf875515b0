//! Catalog domain module.
//!
//! The catalog is the ground truth the filtering engine reads: an ordered,
//! validated, immutable collection of priced construction-material products.
//! It is assembled once (from memory or an in-memory JSON document) and then
//! shared read-only.

pub mod catalog;
pub mod fixtures;
pub mod product;

pub use catalog::Catalog;
pub use product::{Brand, Category, Product, RATING_MAX, RATING_MIN};
