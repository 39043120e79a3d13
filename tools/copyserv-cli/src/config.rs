//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use copyserv_shop::contact::{SUBMIT_DELAY, WHATSAPP_NUMBER};
use copyserv_shop::media::{ImagePathResolver, FALLBACK_IMAGE, IMAGE_ROOT};
use landing_site::{BusinessInfo, SiteContent, DEFAULT_TITLE};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["copyserv.toml", ".copyserv.toml", "copyserv.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Business identity.
    #[serde(default)]
    pub business: BusinessConfig,

    /// Image locations.
    #[serde(default)]
    pub images: ImagesConfig,

    /// Contact form behaviour.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Site output.
    #[serde(default)]
    pub site: SiteConfig,
}

impl CliConfig {
    /// Load config from a file. JSON if the path ends in `.json`, TOML otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Image resolver honouring `[images]`.
    pub fn resolver(&self) -> ImagePathResolver {
        ImagePathResolver::new()
            .with_root(self.images.root.as_str())
            .with_fallback(self.images.fallback.as_str())
    }

    /// Pause before the chat link is produced.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact.submit_delay_ms)
    }

    /// Page copy with `[business]` and `[site]` applied.
    pub fn site_content(&self) -> SiteContent {
        SiteContent::new(self.site.title.as_str()).with_business(BusinessInfo {
            name: self.business.name.clone(),
            tagline: self.business.tagline.clone(),
            whatsapp_number: self.business.whatsapp_number.clone(),
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Business identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessConfig {
    #[serde(default = "default_business_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// International format without `+`.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
}

fn default_business_name() -> String {
    "CopyServ".to_string()
}

fn default_tagline() -> String {
    "Venta y servicio técnico de fotocopiadoras".to_string()
}

fn default_whatsapp_number() -> String {
    WHATSAPP_NUMBER.to_string()
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            tagline: default_tagline(),
            whatsapp_number: default_whatsapp_number(),
        }
    }
}

/// Image locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Root folder for product images.
    #[serde(default = "default_image_root")]
    pub root: String,

    /// Placeholder shown when an image is missing.
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_image_root() -> String {
    IMAGE_ROOT.to_string()
}

fn default_fallback() -> String {
    FALLBACK_IMAGE.to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            root: default_image_root(),
            fallback: default_fallback(),
        }
    }
}

/// Contact form behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

fn default_submit_delay_ms() -> u64 {
    SUBMIT_DELAY.as_millis() as u64
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

/// Site output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory `site build` writes to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_output_dir() -> String {
    "dist".to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            title: default_title(),
        }
    }
}

/// Generate a default copyserv.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# CopyServ configuration

[business]
name = "{name}"
tagline = "{tagline}"
whatsapp_number = "{number}"

[images]
root = "{root}"
fallback = "{fallback}"

[contact]
# Pause before the chat link is produced, in milliseconds
submit_delay_ms = {delay}

[site]
output_dir = "{out}"
title = "{title}"
"#,
        name = default_business_name(),
        tagline = default_tagline(),
        number = default_whatsapp_number(),
        root = default_image_root(),
        fallback = default_fallback(),
        delay = default_submit_delay_ms(),
        out = default_output_dir(),
        title = default_title(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[business]
name = "Copias Lima"

[contact]
submit_delay_ms = 0
"#,
        )
        .unwrap();

        assert_eq!(config.business.name, "Copias Lima");
        assert_eq!(config.business.whatsapp_number, "51977851120");
        assert_eq!(config.submit_delay(), Duration::ZERO);
        assert_eq!(config.images.root, "IMAGENES");
        assert_eq!(config.site.output_dir, "dist");
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("copyserv.json");
        std::fs::write(&json_path, r#"{"images": {"root": "img"}}"#).unwrap();
        let config = CliConfig::load(&json_path).unwrap();
        assert_eq!(config.images.root, "img");
        assert_eq!(config.images.fallback, "IMAGENES/no-image.jpg");

        let toml_path = dir.path().join("copyserv.toml");
        config.save(&toml_path).unwrap();
        assert_eq!(CliConfig::load(&toml_path).unwrap(), config);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copyserv.toml");
        std::fs::write(&path, "[contact]\nsubmit_delay_ms = \"soon\"\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_resolver_uses_image_settings() {
        let mut config = CliConfig::default();
        config.images.root = "static".to_string();
        config.images.fallback = "static/none.jpg".to_string();

        let resolver = config.resolver();
        let product = copyserv_shop::catalog::Catalog::standard().products()[0].clone();
        assert_eq!(resolver.resolve(&product), "static/ricoh/ricoh-mpc-2004.jpg");
        assert_eq!(resolver.fallback(), "static/none.jpg");
    }

    #[test]
    fn test_site_content_from_config() {
        let mut config = CliConfig::default();
        config.site.title = "Tienda".to_string();
        config.business.whatsapp_number = "51900000000".to_string();

        let content = config.site_content();
        assert_eq!(content.title, "Tienda");
        assert_eq!(content.business.whatsapp_number, "51900000000");
        assert_eq!(content.business.name, "CopyServ");
    }
}
