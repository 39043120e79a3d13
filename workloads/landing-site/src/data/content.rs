//! Page copy for the landing sections.

use serde::{Deserialize, Serialize};

use copyserv_shop::contact::WHATSAPP_NUMBER;

/// Business identity shown in the header, footer and chat links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub tagline: String,
    /// International format without `+`.
    pub whatsapp_number: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "CopyServ".to_string(),
            tagline: "Venta y servicio técnico de fotocopiadoras".to_string(),
            whatsapp_number: WHATSAPP_NUMBER.to_string(),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_url: String,
    pub badges: Vec<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Fotocopiadoras Ricoh y Canon".to_string(),
            subheadline: "Venta de equipos, repuestos e insumos con servicio técnico especializado en Lima"
                .to_string(),
            cta_text: "Ver catálogo".to_string(),
            cta_url: "#catalogo".to_string(),
            badges: vec![
                "Garantía".to_string(),
                "Técnicos certificados".to_string(),
                "Atención a domicilio".to_string(),
            ],
        }
    }
}

/// A card in a grid of icon, title and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Font Awesome icon class, e.g. `fa-tools`.
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Card {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Services section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub services: Vec<Card>,
}

impl Default for ServicesContent {
    fn default() -> Self {
        Self {
            section_title: "Nuestros servicios".to_string(),
            section_subtitle: "Todo lo que tu fotocopiadora necesita".to_string(),
            services: vec![
                Card::new(
                    "fa-tools",
                    "Mantenimiento preventivo",
                    "Limpieza, ajuste y revisión para evitar paradas inesperadas.",
                ),
                Card::new(
                    "fa-wrench",
                    "Reparación",
                    "Diagnóstico y reparación de fallas en equipos Ricoh y Canon.",
                ),
                Card::new(
                    "fa-print",
                    "Venta de equipos",
                    "Multifuncionales seminuevos revisados y listos para trabajar.",
                ),
                Card::new(
                    "fa-cogs",
                    "Repuestos e insumos",
                    "Cilindros, fusores, reveladores, cuchillas y toner.",
                ),
            ],
        }
    }
}

/// "Why us" section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub section_title: String,
    pub features: Vec<Card>,
}

impl Default for FeaturesContent {
    fn default() -> Self {
        Self {
            section_title: "¿Por qué elegirnos?".to_string(),
            features: vec![
                Card::new(
                    "fa-clock",
                    "Respuesta rápida",
                    "Atendemos tu solicitud el mismo día.",
                ),
                Card::new(
                    "fa-shield-alt",
                    "Garantía",
                    "Todos nuestros trabajos y equipos tienen garantía.",
                ),
                Card::new(
                    "fa-user-cog",
                    "Experiencia",
                    "Técnicos con años de experiencia en Ricoh y Canon.",
                ),
            ],
        }
    }
}

/// Default document title.
pub const DEFAULT_TITLE: &str = "CopyServ | Fotocopiadoras Ricoh y Canon";

/// All copy for one landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Document title.
    pub title: String,
    pub business: BusinessInfo,
    pub hero: HeroContent,
    pub services: ServicesContent,
    pub features: FeaturesContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            business: BusinessInfo::default(),
            hero: HeroContent::default(),
            services: ServicesContent::default(),
            features: FeaturesContent::default(),
        }
    }
}

impl SiteContent {
    /// Default copy under `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_business(mut self, business: BusinessInfo) -> Self {
        self.business = business;
        self
    }
}
