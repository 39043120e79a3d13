//! Facet counts for the catalog filter bar.

use serde::{Deserialize, Serialize};

use crate::catalog::{Brand, Catalog, ProductCategory};
use crate::search::{FacetSelector, FilterSelection, ALL_TAG};

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Marca").
    pub name: String,
    /// Field this facet filters on.
    pub field: String,
    /// Facet values, starting with the `all` wildcard.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty facet.
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(
        &mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        count: usize,
        selected: bool,
    ) {
        self.values.push(FacetValue {
            value: value.into(),
            label: label.into(),
            count,
            selected,
        });
    }

    /// The currently selected value, if any.
    pub fn selected(&self) -> Option<&FacetValue> {
        self.values.iter().find(|v| v.selected)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// Raw selector value.
    pub value: String,
    /// Button label.
    pub label: String,
    /// Number of products this value would show.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

/// Brand and category facets for `selection`.
///
/// Each facet is counted under the *other* facet's current selection, so the
/// numbers show what clicking a button would yield.
pub fn catalog_facets(catalog: &Catalog, selection: &FilterSelection) -> Vec<Facet> {
    let mut brand = Facet::new("Marca", "brand");
    let by_category: Vec<_> = catalog
        .products()
        .iter()
        .filter(|p| selection.category.matches(p.category))
        .collect();
    brand.add_value(ALL_TAG, "Todas", by_category.len(), selection.brand.is_all());
    for b in Brand::ALL {
        let count = by_category.iter().filter(|p| p.brand == b).count();
        let selected = selection.brand == FacetSelector::Only(b);
        brand.add_value(b.as_str(), b.display_name(), count, selected);
    }

    let mut category = Facet::new("Categoría", "category");
    let by_brand: Vec<_> = catalog
        .products()
        .iter()
        .filter(|p| selection.brand.matches(p.brand))
        .collect();
    category.add_value(ALL_TAG, "Todos", by_brand.len(), selection.category.is_all());
    for c in ProductCategory::ALL {
        let count = by_brand.iter().filter(|p| p.category == c).count();
        let selected = selection.category == FacetSelector::Only(c);
        category.add_value(c.as_str(), c.display_name(), count, selected);
    }

    vec![brand, category]
}
