//! Product catalog module.
//!
//! Contains the product record, its facet tags, and the fixed catalog.

#[allow(clippy::module_inception)]
mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::{Brand, Product, ProductCategory};
