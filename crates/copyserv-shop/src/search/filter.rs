//! Facet selectors and the catalog filter state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Brand, Product, ProductCategory};

/// Wildcard tag accepted by every selector.
pub const ALL_TAG: &str = "all";

/// A tag that a facet selector can pin.
pub trait FacetTag: Copy + PartialEq {
    /// Parse the lowercase tag used by the filter buttons.
    fn parse_tag(raw: &str) -> Option<Self>;

    /// The lowercase tag.
    fn tag(&self) -> &'static str;
}

impl FacetTag for Brand {
    fn parse_tag(raw: &str) -> Option<Self> {
        Brand::from_str(raw)
    }

    fn tag(&self) -> &'static str {
        self.as_str()
    }
}

impl FacetTag for ProductCategory {
    fn parse_tag(raw: &str) -> Option<Self> {
        ProductCategory::from_str(raw)
    }

    fn tag(&self) -> &'static str {
        self.as_str()
    }
}

/// One filter dimension with an `all` wildcard.
///
/// Raw selector input is never rejected: a value that is neither `all` nor a
/// known tag is kept as `Unknown` and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FacetSelector<T> {
    /// Wildcard.
    #[default]
    All,
    /// Only items carrying this tag.
    Only(T),
    /// Unrecognized raw input.
    Unknown(String),
}

impl<T: FacetTag> FacetSelector<T> {
    /// Interpret raw selector input.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_TAG {
            return FacetSelector::All;
        }
        match T::parse_tag(raw) {
            Some(tag) => FacetSelector::Only(tag),
            None => FacetSelector::Unknown(raw.to_string()),
        }
    }

    /// Check whether an item with `value` passes this selector.
    pub fn matches(&self, value: T) -> bool {
        match self {
            FacetSelector::All => true,
            FacetSelector::Only(tag) => *tag == value,
            FacetSelector::Unknown(_) => false,
        }
    }

    /// The raw form, as a filter button would send it.
    pub fn as_str(&self) -> &str {
        match self {
            FacetSelector::All => ALL_TAG,
            FacetSelector::Only(tag) => tag.tag(),
            FacetSelector::Unknown(raw) => raw,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelector::All)
    }
}

impl<T: FacetTag> fmt::Display for FacetSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: FacetTag> From<&str> for FacetSelector<T> {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl<T: FacetTag> Serialize for FacetSelector<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: FacetTag> Deserialize<'de> for FacetSelector<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Brand selector.
pub type BrandFilter = FacetSelector<Brand>;

/// Category selector.
pub type CategoryFilter = FacetSelector<ProductCategory>;

/// The catalog modal's filter state.
///
/// Owned by whoever drives the view; mutate it with the setters, then call
/// [`Catalog::render`](crate::catalog::Catalog::render).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected brand.
    #[serde(default)]
    pub brand: BrandFilter,
    /// Selected category.
    #[serde(default)]
    pub category: CategoryFilter,
}

impl FilterSelection {
    /// Create a selection with both facets set to `all`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from raw selector values.
    pub fn from_raw(brand: &str, category: &str) -> Self {
        Self {
            brand: BrandFilter::parse(brand),
            category: CategoryFilter::parse(category),
        }
    }

    /// Set the brand selector from a raw value.
    pub fn set_brand(&mut self, raw: &str) {
        self.brand = BrandFilter::parse(raw);
    }

    /// Set the category selector from a raw value.
    pub fn set_category(&mut self, raw: &str) {
        self.category = CategoryFilter::parse(raw);
    }

    /// Check whether a product is visible under this selection.
    pub fn matches(&self, product: &Product) -> bool {
        self.brand.matches(product.brand) && self.category.matches(product.category)
    }

    /// Check whether both facets are wildcards.
    pub fn is_unfiltered(&self) -> bool {
        self.brand.is_all() && self.category.is_all()
    }
}
