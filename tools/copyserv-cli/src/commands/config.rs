//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use copyserv_shop::contact::is_valid_phone;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[business]");
    ctx.output.kv("name", &config.business.name);
    ctx.output.kv("tagline", &config.business.tagline);
    ctx.output.kv("whatsapp_number", &config.business.whatsapp_number);

    ctx.output.info("[images]");
    ctx.output.kv("root", &config.images.root);
    ctx.output.kv("fallback", &config.images.fallback);

    ctx.output.info("[contact]");
    ctx.output
        .kv("submit_delay_ms", &config.contact.submit_delay_ms.to_string());

    ctx.output.info("[site]");
    ctx.output.kv("output_dir", &config.site.output_dir);
    ctx.output.kv("title", &config.site.title);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = &ctx.config_path else {
        bail!("No config file found. Run `copyserv config init` to create one.");
    };

    let mut config = ctx.config.clone();
    set_config_value(&mut config, key, value)?;
    config.save(config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

/// Errors and warnings for a configuration.
pub fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if config.business.name.trim().is_empty() {
        errors.push("business.name is required".to_string());
    }

    let number = &config.business.whatsapp_number;
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        errors.push("business.whatsapp_number must be digits only, without '+'".to_string());
    } else if !is_valid_phone(number) {
        errors.push("business.whatsapp_number is too short".to_string());
    }

    if config.images.root.trim().is_empty() {
        errors.push("images.root is required".to_string());
    }

    if !config.images.fallback.ends_with(".jpg") && !config.images.fallback.ends_with(".png") {
        warnings.push(format!(
            "images.fallback '{}' is not a .jpg or .png file",
            config.images.fallback
        ));
    }

    if config.contact.submit_delay_ms > 10_000 {
        warnings.push(format!(
            "contact.submit_delay_ms is {}ms; visitors may think the form is stuck",
            config.contact.submit_delay_ms
        ));
    }

    if config.site.output_dir.trim().is_empty() {
        errors.push("site.output_dir is required".to_string());
    }

    (errors, warnings)
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["business", "name"] => Ok(format!("\"{}\"", config.business.name)),
        ["business", "tagline"] => Ok(format!("\"{}\"", config.business.tagline)),
        ["business", "whatsapp_number"] => {
            Ok(format!("\"{}\"", config.business.whatsapp_number))
        }
        ["images", "root"] => Ok(format!("\"{}\"", config.images.root)),
        ["images", "fallback"] => Ok(format!("\"{}\"", config.images.fallback)),
        ["contact", "submit_delay_ms"] => Ok(config.contact.submit_delay_ms.to_string()),
        ["site", "output_dir"] => Ok(format!("\"{}\"", config.site.output_dir)),
        ["site", "title"] => Ok(format!("\"{}\"", config.site.title)),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["business", "name"] => config.business.name = value.to_string(),
        ["business", "tagline"] => config.business.tagline = value.to_string(),
        ["business", "whatsapp_number"] => config.business.whatsapp_number = value.to_string(),
        ["images", "root"] => config.images.root = value.to_string(),
        ["images", "fallback"] => config.images.fallback = value.to_string(),
        ["contact", "submit_delay_ms"] => config.contact.submit_delay_ms = value.parse()?,
        ["site", "output_dir"] => config.site.output_dir = value.to_string(),
        ["site", "title"] => config.site.title = value.to_string(),
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}
