//! Search module.
//!
//! Facet selectors, the filter state they make up, and facet counts.

mod facets;
mod filter;

pub use facets::{catalog_facets, Facet, FacetValue};
pub use filter::{
    BrandFilter, CategoryFilter, FacetSelector, FacetTag, FilterSelection, ALL_TAG,
};
