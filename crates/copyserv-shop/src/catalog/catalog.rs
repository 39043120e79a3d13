//! The fixed product catalog.

use serde::Serialize;

use crate::catalog::{Brand, Product, ProductCategory};
use crate::error::ShopError;
use crate::search::FilterSelection;

const RICOH_MPC_MODELS: [&str; 9] = [
    "2004", "2504", "3004", "3504", "5504", "6004", "4503", "5503", "6005",
];

const RICOH_MP_MODELS: [&str; 15] = [
    "2555", "3055", "4055", "6055", "2554", "3054", "3554", "4054", "5054", "6054", "7503",
    "6503", "9003", "9002", "7502",
];

const RICOH_IM_MODELS: [&str; 4] = ["2500", "3500", "4500", "5500"];

const CANON_MODELS: [&str; 12] = [
    "256", "356", "255", "355", "475", "5240", "5235", "5255", "5560", "5540", "5550", "5535",
];

/// Parts and supplies, in display order.
const PARTS_AND_SUPPLIES: [(&str, Brand, ProductCategory); 13] = [
    ("Cilindro Canon 5560", Brand::Canon, ProductCategory::Repuesto),
    ("Cilindro Ricoh", Brand::Ricoh, ProductCategory::Repuesto),
    ("Revelador", Brand::Ricoh, ProductCategory::Repuesto),
    ("Cuchilla Toner", Brand::Ricoh, ProductCategory::Repuesto),
    ("Faja Transferencia Canon", Brand::Canon, ProductCategory::Repuesto),
    ("Almohadilla Ricoh", Brand::Ricoh, ProductCategory::Repuesto),
    ("Pelicula Difusor Ricoh", Brand::Ricoh, ProductCategory::Repuesto),
    ("Unidad de Imagen Ricoh", Brand::Ricoh, ProductCategory::Repuesto),
    ("Unidad Fusor Ricoh", Brand::Ricoh, ProductCategory::Repuesto),
    ("Rodillo de Presión", Brand::Ricoh, ProductCategory::Repuesto),
    ("Unidad de Revelado Negro", Brand::Ricoh, ProductCategory::Repuesto),
    ("Toner Ricoh", Brand::Ricoh, ProductCategory::Insumo),
    ("Toner Canon", Brand::Canon, ProductCategory::Insumo),
];

/// An ordered, read-only list of products.
///
/// Order is significant: every filtered view preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's product list.
    pub fn standard() -> Self {
        let equipment = |prefix: &'static str, models: &'static [&'static str], brand: Brand| {
            models.iter().map(move |model| {
                Product::new(format!("{} {}", prefix, model), brand, ProductCategory::Equipo)
            })
        };

        let products = equipment("Ricoh MPC", &RICOH_MPC_MODELS, Brand::Ricoh)
            .chain(equipment("Ricoh MP", &RICOH_MP_MODELS, Brand::Ricoh))
            .chain(equipment("Ricoh IM", &RICOH_IM_MODELS, Brand::Ricoh))
            .chain(equipment("Canon", &CANON_MODELS, Brand::Canon))
            .chain(
                PARTS_AND_SUPPLIES
                    .iter()
                    .map(|(name, brand, cat)| Product::new(*name, *brand, *cat)),
            )
            .collect();

        Self { products }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products visible under `selection`, in catalog order.
    pub fn render(&self, selection: &FilterSelection) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| selection.matches(p))
            .collect()
    }

    /// Look up a product by its exact display name.
    pub fn find(&self, name: &str) -> Result<&Product, ShopError> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ShopError::ProductNotFound(name.to_string()))
    }

    /// Serialize the catalog as a JSON array of `{name, brand, cat}` records.
    pub fn to_json(&self) -> Result<String, ShopError> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
