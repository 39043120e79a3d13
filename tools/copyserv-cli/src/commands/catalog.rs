//! Catalog commands.

use anyhow::Result;
use serde::Serialize;

use copyserv_shop::catalog::{Catalog, Product};
use copyserv_shop::contact::{product_enquiry, product_enquiry_link};
use copyserv_shop::media::ImagePathResolver;
use copyserv_shop::search::catalog_facets;

use super::{CatalogArgs, CatalogCommand, FilterArgs};
use crate::context::Context;
use crate::output::{category_badge, column_widths, format_row};

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::standard();
    match args.command {
        CatalogCommand::List(filter) => list(&catalog, &filter, ctx),
        CatalogCommand::Path { name } => path(&catalog, &name, ctx),
        CatalogCommand::Facets(filter) => facets(&catalog, &filter, ctx),
        CatalogCommand::Enquire { name } => enquire(&catalog, &name, ctx),
    }
}

/// One catalog row as listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub image: String,
}

/// Rows for the products visible under `filter`, with resolved images.
pub fn listing(
    catalog: &Catalog,
    filter: &FilterArgs,
    resolver: &ImagePathResolver,
) -> Vec<ListedProduct> {
    catalog
        .render(&filter.selection())
        .into_iter()
        .map(|p| ListedProduct {
            name: p.name.clone(),
            brand: p.brand.as_str().to_string(),
            category: p.category.as_str().to_string(),
            image: resolver.resolve(p),
        })
        .collect()
}

fn list(catalog: &Catalog, filter: &FilterArgs, ctx: &Context) -> Result<()> {
    let resolver = ctx.config.resolver();
    let rows = listing(catalog, filter, &resolver);

    for row in &rows {
        ctx.logger
            .debug_builder("resolved image path")
            .field("product", row.name.as_str())
            .field("path", row.image.as_str())
            .emit();
    }

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    let selection = filter.selection();
    ctx.output.header(&format!(
        "Catálogo (marca: {}, categoría: {})",
        selection.brand, selection.category
    ));

    if rows.is_empty() {
        ctx.output.warn("No hay productos para este filtro");
        return Ok(());
    }

    let visible = catalog.render(&selection);
    let cells: Vec<Vec<String>> = visible
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.brand.display_name().to_string(),
                p.category.display_name().to_string(),
            ]
        })
        .collect();
    let widths = column_widths(&cells);

    for ((cell, product), row) in cells.iter().zip(&visible).zip(&rows) {
        let leading = format_row(&[cell[0].as_str(), cell[1].as_str()], &widths[..2]);
        let pad = widths[2].saturating_sub(cell[2].chars().count());
        println!(
            "  {:width$}  {}{}  {}",
            leading,
            category_badge(product.category),
            " ".repeat(pad),
            console::style(&row.image).dim(),
            width = widths[0] + widths[1] + 2
        );
    }

    ctx.output.info(&format!("{} productos", rows.len()));
    Ok(())
}

fn path(catalog: &Catalog, name: &str, ctx: &Context) -> Result<()> {
    let product = catalog.find(name)?;
    let location = ctx.config.resolver().locate(product);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "path": location.to_path_string(),
            "fallback": ctx.config.images.fallback,
        }));
        return Ok(());
    }

    println!("{}", location);
    ctx.output.debug(&format!("slug: {}", location.slug));
    Ok(())
}

fn facets(catalog: &Catalog, filter: &FilterArgs, ctx: &Context) -> Result<()> {
    let facets = catalog_facets(catalog, &filter.selection());

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    for facet in &facets {
        ctx.output.header(&facet.name);
        for value in &facet.values {
            let marker = if value.selected { "*" } else { " " };
            ctx.output.table_row(
                &[marker, value.label.as_str(), value.count.to_string().as_str()],
                &[1, 10, 3],
            );
        }
    }
    Ok(())
}

fn enquire(catalog: &Catalog, name: &str, ctx: &Context) -> Result<()> {
    let product: &Product = catalog.find(name)?;
    let number = &ctx.config.business.whatsapp_number;
    let link = product_enquiry_link(number, &product.name);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "message": product_enquiry(&product.name),
            "link": link,
        }));
        return Ok(());
    }

    ctx.output.kv("Mensaje", &product_enquiry(&product.name));
    println!("{}", link);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(brand: &str, category: &str) -> FilterArgs {
        FilterArgs {
            brand: brand.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_listing_follows_filter_order() {
        let catalog = Catalog::standard();
        let rows = listing(&catalog, &filter("all", "insumo"), &ImagePathResolver::new());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Toner Ricoh");
        assert_eq!(rows[0].image, "IMAGENES/insumos/toner-ricoh.jpg");
        assert_eq!(rows[1].name, "Toner Canon");
        assert_eq!(rows[1].brand, "canon");
    }

    #[test]
    fn test_listing_unknown_selector_is_empty() {
        let catalog = Catalog::standard();
        let rows = listing(&catalog, &filter("Ricoh", "all"), &ImagePathResolver::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_listing_serializes() {
        let catalog = Catalog::standard();
        let rows = listing(&catalog, &filter("canon", "repuesto"), &ImagePathResolver::new());
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[1]["name"], "Faja Transferencia Canon");
        assert_eq!(
            json[1]["image"],
            "IMAGENES/repuestos/canon_faja_trasferencia.jpg"
        );
    }
}
