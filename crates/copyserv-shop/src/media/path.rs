//! Image path resolution for catalog items.

use serde::Serialize;

use crate::catalog::{Brand, Product, ProductCategory};
use crate::media::slugify;

/// Directory every product image lives under.
pub const IMAGE_ROOT: &str = "IMAGENES";

/// Placeholder shown when a resolved image is missing.
pub const FALLBACK_IMAGE: &str = "IMAGENES/no-image.jpg";

/// Image file extension, without the dot.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Exact product names whose image files do not follow the slug rule.
///
/// Entries are reproduced as the deployed files are named, including the
/// space in `ricoh almohadilla` and the spelling of `rodillo_de_precion`.
pub const SLUG_OVERRIDES: [(&str, &str); 9] = [
    ("Cuchilla Toner", "cuchilla-toner"),
    ("Cilindro Ricoh", "cilindro-ricoh"),
    ("Faja Transferencia Canon", "canon_faja_trasferencia"),
    ("Almohadilla Ricoh", "ricoh almohadilla"),
    ("Pelicula Difusor Ricoh", "ricoh_pelicula_difusor"),
    ("Unidad de Imagen Ricoh", "ricoh_unidad_de_imagen"),
    ("Unidad Fusor Ricoh", "ricoh_unidad_fusor"),
    ("Rodillo de Presión", "rodillo_de_precion"),
    ("Unidad de Revelado Negro", "unidad_de_revelado_negro"),
];

/// One step of slug resolution. Rules are tried in order; the first that
/// yields a slug wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugRule {
    /// Literal slug for an exact product name.
    ExactName(Vec<(String, String)>),
    /// Canon machines are filed as `canon-ir-<model>`.
    CanonEquipment,
    /// Plain [`slugify`] of the name. Always applies.
    Slugify,
}

impl SlugRule {
    /// The built-in override table.
    pub fn default_overrides() -> Self {
        SlugRule::ExactName(
            SLUG_OVERRIDES
                .iter()
                .map(|(name, slug)| (name.to_string(), slug.to_string()))
                .collect(),
        )
    }

    /// Apply this rule, or `None` if it does not cover `product`.
    pub fn apply(&self, product: &Product) -> Option<String> {
        match self {
            SlugRule::ExactName(table) => table
                .iter()
                .find(|(name, _)| *name == product.name)
                .map(|(_, slug)| slug.clone()),
            SlugRule::CanonEquipment => {
                if product.brand == Brand::Canon && product.is_equipment() {
                    let slug = slugify(&product.name);
                    Some(format!("canon-ir-{}", slug.replacen("canon-", "", 1)))
                } else {
                    None
                }
            }
            SlugRule::Slugify => Some(slugify(&product.name)),
        }
    }
}

/// Folder (with leading `/`) that holds images for `product`.
pub fn folder_for(product: &Product) -> String {
    match product.category {
        ProductCategory::Equipo => format!("/{}", product.brand.as_str()),
        ProductCategory::Repuesto => "/repuestos".to_string(),
        ProductCategory::Insumo => "/insumos".to_string(),
    }
}

/// A resolved image location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePath {
    /// Image root (e.g., `IMAGENES`).
    pub root: String,
    /// Folder with leading `/`.
    pub folder: String,
    /// File stem.
    pub slug: String,
}

impl ImagePath {
    /// Relative path as the page references it.
    pub fn to_path_string(&self) -> String {
        format!(
            "{}{}/{}.{}",
            self.root, self.folder, self.slug, IMAGE_EXTENSION
        )
    }
}

impl std::fmt::Display for ImagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_path_string())
    }
}

/// Derives image paths from product metadata.
///
/// Resolution is total: every product gets a path. Whether the file exists is
/// the page's concern, which falls back to [`FALLBACK_IMAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePathResolver {
    root: String,
    fallback: String,
    rules: Vec<SlugRule>,
}

impl ImagePathResolver {
    /// Create a resolver with the built-in rules under `IMAGENES`.
    pub fn new() -> Self {
        Self {
            root: IMAGE_ROOT.to_string(),
            fallback: FALLBACK_IMAGE.to_string(),
            rules: vec![
                SlugRule::default_overrides(),
                SlugRule::CanonEquipment,
                SlugRule::Slugify,
            ],
        }
    }

    /// Use a different image root.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Use a different placeholder image.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Replace the rule list. A trailing [`SlugRule::Slugify`] is appended if
    /// missing so resolution stays total.
    pub fn with_rules(mut self, mut rules: Vec<SlugRule>) -> Self {
        if rules.last() != Some(&SlugRule::Slugify) {
            rules.push(SlugRule::Slugify);
        }
        self.rules = rules;
        self
    }

    /// Placeholder image path.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Resolve the slug for `product`.
    pub fn slug_for(&self, product: &Product) -> String {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(product))
            .unwrap_or_else(|| slugify(&product.name))
    }

    /// Resolve the structured image location for `product`.
    pub fn locate(&self, product: &Product) -> ImagePath {
        ImagePath {
            root: self.root.clone(),
            folder: folder_for(product),
            slug: self.slug_for(product),
        }
    }

    /// Resolve the relative image path for `product`.
    pub fn resolve(&self, product: &Product) -> String {
        self.locate(product).to_path_string()
    }
}

impl Default for ImagePathResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `product`'s image path with the built-in rules.
pub fn resolve_path(product: &Product) -> String {
    ImagePathResolver::new().resolve(product)
}
