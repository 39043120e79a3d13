//! Static site build.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context as _, Result};

use copyserv_shop::catalog::Catalog;
use copyserv_shop::search::FilterSelection;
use landing_site::LandingPage;

use super::{SiteArgs, SiteCommand};
use crate::config::CliConfig;
use crate::context::Context;

/// Run the site command.
pub async fn run(args: SiteArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SiteCommand::Build { out, filter } => {
            let out_dir = ctx.resolve_path(out.as_deref().unwrap_or(&ctx.config.site.output_dir));
            build(&ctx.config, &out_dir, filter.selection(), ctx)
        }
    }
}

/// Render the landing page for `config` under `selection`.
pub fn render_site(config: &CliConfig, selection: FilterSelection) -> String {
    let content = config.site_content();
    let catalog = Catalog::standard();
    LandingPage::new(&content, &catalog)
        .with_selection(selection)
        .with_resolver(config.resolver())
        .with_submit_delay(config.submit_delay())
        .render()
}

/// Write `html` to `<out_dir>/index.html`, creating the directory.
pub fn write_index(out_dir: &Path, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    let index = out_dir.join("index.html");
    fs::write(&index, html).with_context(|| format!("Failed to write {}", index.display()))?;
    Ok(index)
}

fn build(
    config: &CliConfig,
    out_dir: &Path,
    selection: FilterSelection,
    ctx: &Context,
) -> Result<()> {
    let start = Instant::now();
    let spinner = ctx.output.spinner("Rendering landing page...");

    let html = render_site(config, selection);
    let written = write_index(out_dir, &html);
    spinner.finish_and_clear();
    let index = written?;

    ctx.logger
        .info_builder("site built")
        .field("path", index.display().to_string())
        .field_u64("bytes", html.len() as u64)
        .duration_ms("elapsed_ms", start.elapsed())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": index.display().to_string(),
            "bytes": html.len(),
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Wrote {}", index.display()));
    ctx.output.kv("Size", &format!("{} bytes", html.len()));
    if let Some(path) = &ctx.config_path {
        ctx.output.kv("Config", &path.display().to_string());
    }
    ctx.output.warn(&format!(
        "Copy product images under {}/ next to index.html",
        config.images.root
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_site_uses_config() {
        let mut config = CliConfig::default();
        config.site.title = "Tienda de prueba".to_string();
        config.images.root = "img".to_string();

        let html = render_site(&config, FilterSelection::from_raw("canon", "all"));
        assert!(html.contains("<title>Tienda de prueba</title>"));
        assert!(html.contains(r#"src="img/canon/canon-ir-256.jpg""#));
        assert!(html.contains(r#"<span id="catalog-count">15</span>"#));
    }

    #[test]
    fn test_write_index_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public").join("site");

        let index = write_index(&out, "<html></html>").unwrap();
        assert_eq!(index, out.join("index.html"));
        assert_eq!(fs::read_to_string(index).unwrap(), "<html></html>");
    }
}
