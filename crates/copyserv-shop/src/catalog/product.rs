//! Product and facet tag types.

use serde::{Deserialize, Serialize};

/// Manufacturer of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Ricoh,
    Canon,
}

impl Brand {
    /// Every brand, in filter-bar order.
    pub const ALL: [Brand; 2] = [Brand::Ricoh, Brand::Canon];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Ricoh => "ricoh",
            Brand::Canon => "canon",
        }
    }

    /// Parse a lowercase brand tag. Matching is exact.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ricoh" => Some(Brand::Ricoh),
            "canon" => Some(Brand::Canon),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::Ricoh => "Ricoh",
            Brand::Canon => "Canon",
        }
    }
}

/// Kind of catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// A complete machine.
    Equipo,
    /// A spare part.
    Repuesto,
    /// A consumable such as toner.
    Insumo,
}

impl ProductCategory {
    /// Every category, in filter-bar order.
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::Equipo,
        ProductCategory::Repuesto,
        ProductCategory::Insumo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Equipo => "equipo",
            ProductCategory::Repuesto => "repuesto",
            ProductCategory::Insumo => "insumo",
        }
    }

    /// Parse a lowercase category tag. Matching is exact.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "equipo" => Some(ProductCategory::Equipo),
            "repuesto" => Some(ProductCategory::Repuesto),
            "insumo" => Some(ProductCategory::Insumo),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Equipo => "Equipos",
            ProductCategory::Repuesto => "Repuestos",
            ProductCategory::Insumo => "Insumos",
        }
    }
}

/// A product in the catalog.
///
/// Products are immutable once the catalog is built. `name` doubles as the
/// lookup key and as the input for image path derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Manufacturer.
    pub brand: Brand,
    /// Kind of item.
    #[serde(rename = "cat")]
    pub category: ProductCategory,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, brand: Brand, category: ProductCategory) -> Self {
        Self {
            name: name.into(),
            brand,
            category,
        }
    }

    /// Check if this is a complete machine.
    pub fn is_equipment(&self) -> bool {
        self.category == ProductCategory::Equipo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_tags() {
        for brand in Brand::ALL {
            assert_eq!(Brand::from_str(brand.as_str()), Some(brand));
        }
        assert_eq!(Brand::from_str("Ricoh"), None);
        assert_eq!(Brand::from_str("xerox"), None);
    }

    #[test]
    fn test_category_tags() {
        for cat in ProductCategory::ALL {
            assert_eq!(ProductCategory::from_str(cat.as_str()), Some(cat));
        }
        assert_eq!(ProductCategory::from_str("all"), None);
    }

    #[test]
    fn test_product_serializes_with_short_category_key() {
        let product = Product::new("Toner Canon", Brand::Canon, ProductCategory::Insumo);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Toner Canon", "brand": "canon", "cat": "insumo"})
        );
    }

    #[test]
    fn test_is_equipment() {
        assert!(Product::new("Canon 256", Brand::Canon, ProductCategory::Equipo).is_equipment());
        assert!(!Product::new("Revelador", Brand::Ricoh, ProductCategory::Repuesto).is_equipment());
    }
}
