//! Catalog section - filter bar and product grid.

use copyserv_shop::catalog::{Catalog, Product};
use copyserv_shop::contact::product_enquiry_link;
use copyserv_shop::media::ImagePathResolver;
use copyserv_shop::search::{catalog_facets, Facet, FilterSelection};

use super::html_escape;

/// Inputs for the catalog section.
#[derive(Debug, Clone, Copy)]
pub struct CatalogView<'a> {
    pub catalog: &'a Catalog,
    pub selection: &'a FilterSelection,
    pub resolver: &'a ImagePathResolver,
    /// Number that product enquiry links open a chat with.
    pub whatsapp_number: &'a str,
}

/// Swaps a broken product image for the card's `data-fallback` path.
const IMAGE_FALLBACK_HANDLER: &str = "this.onerror=null;this.src=this.dataset.fallback";

/// Render the catalog section.
///
/// Every product gets a card so the page script can refilter in place; cards
/// outside `selection` start out `hidden`.
pub fn render_catalog(view: &CatalogView<'_>) -> String {
    let facets = catalog_facets(view.catalog, view.selection);
    let filters_html: String = facets.iter().map(render_filter_group).collect();

    let cards_html: String = view
        .catalog
        .products()
        .iter()
        .map(|p| render_product_card(p, view))
        .collect();

    let visible = view.catalog.render(view.selection).len();

    format!(
        r#"<section class="catalog" id="catalogo" data-section="catalog">
    <div class="section-header">
        <h2>Catálogo</h2>
        <p class="catalog-count">Mostrando <span id="catalog-count">{}</span> productos</p>
    </div>
    <div class="catalog-filters">
        {}
    </div>
    <div class="product-grid" id="product-grid">
        {}
    </div>
    <p class="catalog-empty"{}>No hay productos para este filtro.</p>
</section>"#,
        visible,
        filters_html,
        cards_html,
        if visible == 0 { "" } else { " hidden" }
    )
}

fn render_filter_group(facet: &Facet) -> String {
    let buttons: String = facet
        .values
        .iter()
        .map(|v| {
            let active = if v.selected { " active" } else { "" };
            format!(
                r#"<button type="button" class="filter-btn{}" data-filter-field="{}" data-filter="{}">{} <span class="facet-count">({})</span></button>"#,
                active,
                html_escape(&facet.field),
                html_escape(&v.value),
                html_escape(&v.label),
                v.count
            )
        })
        .collect();

    format!(
        r#"<div class="filter-group" data-facet="{}">
            <span class="filter-title">{}</span>
            {}
        </div>"#,
        html_escape(&facet.field),
        html_escape(&facet.name),
        buttons
    )
}

fn render_product_card(product: &Product, view: &CatalogView<'_>) -> String {
    let hidden = if view.selection.matches(product) {
        ""
    } else {
        " hidden"
    };
    let link = product_enquiry_link(view.whatsapp_number, &product.name);

    format!(
        r#"<article class="product-card" data-brand="{}" data-category="{}"{}>
    <div class="product-image">
        <img src="{}" alt="{}" loading="lazy" data-fallback="{}" onerror="{}">
    </div>
    <div class="product-info">
        <h3 class="product-title">{}</h3>
        <span class="product-tag">{} · {}</span>
        <a href="{}" class="product-enquiry" target="_blank" rel="noopener">
            <i class="fab fa-whatsapp"></i> Consultar
        </a>
    </div>
</article>"#,
        product.brand.as_str(),
        product.category.as_str(),
        hidden,
        html_escape(&view.resolver.resolve(product)),
        html_escape(&product.name),
        html_escape(view.resolver.fallback()),
        IMAGE_FALLBACK_HANDLER,
        html_escape(&product.name),
        product.brand.display_name(),
        product.category.display_name(),
        html_escape(&link)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(brand: &str, category: &str) -> String {
        let catalog = Catalog::standard();
        let selection = FilterSelection::from_raw(brand, category);
        let resolver = ImagePathResolver::new();
        render_catalog(&CatalogView {
            catalog: &catalog,
            selection: &selection,
            resolver: &resolver,
            whatsapp_number: "51977851120",
        })
    }

    #[test]
    fn test_every_product_has_a_card() {
        let html = render("all", "all");
        assert_eq!(html.matches(r#"class="product-card""#).count(), 53);
        assert!(html.contains(r#"<span id="catalog-count">53</span>"#));
        assert!(html.contains(r#"<p class="catalog-empty" hidden>"#));
    }

    #[test]
    fn test_cards_outside_selection_are_hidden() {
        let html = render("canon", "equipo");
        let shown = html
            .matches(r#"data-brand="canon" data-category="equipo">"#)
            .count();
        assert_eq!(shown, 12);
        assert_eq!(html.matches(r#"data-category="equipo" hidden>"#).count(), 28);
        assert!(html.contains(r#"<span id="catalog-count">12</span>"#));
    }

    #[test]
    fn test_active_filter_buttons() {
        let html = render("ricoh", "all");
        assert!(html.contains(
            r#"class="filter-btn active" data-filter-field="brand" data-filter="ricoh""#
        ));
        assert!(html.contains(
            r#"class="filter-btn active" data-filter-field="category" data-filter="all""#
        ));
        assert!(html.contains(r#"class="filter-btn" data-filter-field="brand" data-filter="all""#));
    }

    #[test]
    fn test_card_image_and_link() {
        let html = render("all", "all");
        assert!(html.contains(r#"src="IMAGENES/canon/canon-ir-5560.jpg""#));
        assert!(html.contains(r#"src="IMAGENES/repuestos/ricoh almohadilla.jpg""#));
        assert!(html.contains(r#"data-fallback="IMAGENES/no-image.jpg""#));
        assert_eq!(html.matches(IMAGE_FALLBACK_HANDLER).count(), 53);
        assert!(html.contains(
            "https://wa.me/51977851120?text=Hola%2C%20deseo%20informaci%C3%B3n%20del%20producto%3A%20Canon%20256"
        ));
    }

    #[test]
    fn test_quoted_fallback_stays_in_attribute() {
        let catalog = Catalog::standard();
        let selection = FilterSelection::default();
        let resolver = ImagePathResolver::new().with_fallback(r#"img/it's "none".jpg"#);
        let html = render_catalog(&CatalogView {
            catalog: &catalog,
            selection: &selection,
            resolver: &resolver,
            whatsapp_number: "51977851120",
        });

        assert!(html.contains(r#"data-fallback="img/it's &quot;none&quot;.jpg""#));
        assert!(!html.contains("this.src='"));
    }

    #[test]
    fn test_unknown_selection_shows_empty_notice() {
        let html = render("xerox", "all");
        assert!(html.contains(r#"<span id="catalog-count">0</span>"#));
        assert!(html.contains(r#"<p class="catalog-empty">"#));
    }
}
