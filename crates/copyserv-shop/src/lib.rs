//! Catalog, image path and contact request logic for the CopyServ storefront.
//!
//! This crate holds everything on the site that follows an actual rule:
//!
//! - **Catalog**: the fixed product list, brand and category tags
//! - **Search**: facet selectors with an `all` wildcard, filter state, facet counts
//! - **Media**: deterministic image paths, including per-product overrides
//! - **Contact**: form validation, message composition, chat links
//!
//! # Example
//!
//! ```rust
//! use copyserv_shop::prelude::*;
//!
//! let catalog = Catalog::standard();
//!
//! let mut selection = FilterSelection::new();
//! selection.set_brand("canon");
//! selection.set_category("equipo");
//!
//! let resolver = ImagePathResolver::new();
//! let first = catalog.render(&selection)[0];
//! assert_eq!(resolver.resolve(first), "IMAGENES/canon/canon-ir-256.jpg");
//! ```

pub mod error;

pub mod catalog;
pub mod contact;
pub mod media;
pub mod search;

pub use error::ShopError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ShopError;

    // Catalog
    pub use crate::catalog::{Brand, Catalog, Product, ProductCategory};

    // Search
    pub use crate::search::{
        catalog_facets, BrandFilter, CategoryFilter, Facet, FacetSelector, FacetValue,
        FilterSelection,
    };

    // Media
    pub use crate::media::{resolve_path, ImagePath, ImagePathResolver, SlugRule};

    // Contact
    pub use crate::contact::{
        compose_message, validate, validate_field, whatsapp_link, ContactRequest, FormField,
        Submission, ValidationReport,
    };
}
