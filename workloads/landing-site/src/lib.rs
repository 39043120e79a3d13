//! CopyServ landing page - static HTML rendering.
//!
//! The page is assembled from independent sections:
//! - Hero banner, services and "why us" cards from [`SiteContent`]
//! - Catalog with facet filter buttons and product cards
//! - Contact form that hands off to a WhatsApp chat
//! - Floating chat button
//!
//! The page script re-applies the same filter and validation rules client
//! side, so a single render serves every selection.

mod data;
mod scripts;
mod sections;
mod shell;

use std::time::Duration;

use copyserv_shop::catalog::Catalog;
use copyserv_shop::contact::SUBMIT_DELAY;
use copyserv_shop::media::ImagePathResolver;
use copyserv_shop::search::FilterSelection;

pub use data::*;
pub use scripts::{landing_page_scripts, script_config};
pub use sections::*;
pub use shell::{HeadContent, Shell};

/// A landing page ready to render.
#[derive(Debug, Clone)]
pub struct LandingPage<'a> {
    content: &'a SiteContent,
    catalog: &'a Catalog,
    selection: FilterSelection,
    resolver: ImagePathResolver,
    submit_delay: Duration,
}

impl<'a> LandingPage<'a> {
    /// Create a page showing the whole catalog.
    pub fn new(content: &'a SiteContent, catalog: &'a Catalog) -> Self {
        Self {
            content,
            catalog,
            selection: FilterSelection::default(),
            resolver: ImagePathResolver::new(),
            submit_delay: SUBMIT_DELAY,
        }
    }

    /// Preselect catalog filters.
    pub fn with_selection(mut self, selection: FilterSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Use a custom image resolver.
    pub fn with_resolver(mut self, resolver: ImagePathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set the pause before the chat opens.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Render the section bodies, in page order.
    pub fn sections(&self) -> Vec<String> {
        let number = &self.content.business.whatsapp_number;
        vec![
            render_hero(&self.content.hero),
            render_services(&self.content.services),
            render_features(&self.content.features),
            render_catalog(&CatalogView {
                catalog: self.catalog,
                selection: &self.selection,
                resolver: &self.resolver,
                whatsapp_number: number,
            }),
            render_contact(),
            render_whatsapp_float(number),
        ]
    }

    /// Render the complete document.
    pub fn render(&self) -> String {
        create_shell(self.content, self.submit_delay).wrap(&self.sections())
    }
}

/// Create the document shell: head, header with navigation, footer.
pub fn create_shell(content: &SiteContent, submit_delay: Duration) -> Shell {
    let business = &content.business;
    let head = HeadContent::new(content.title.as_str())
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", &business.tagline)
        .with_stylesheet(FONT_AWESOME_CSS)
        .with_style(LANDING_STYLES);

    let name = html_escape(&business.name);

    Shell::new(head)
        .with_body_start(format!(
            r##"<body>
<header class="header">
    <nav class="header-content">
        <a href="#inicio" class="logo"><i class="fas fa-print"></i> {name}</a>
        <div class="nav-links">
            <a href="#inicio">Inicio</a>
            <a href="#servicios">Servicios</a>
            <a href="#catalogo">Catálogo</a>
            <a href="#nosotros">Nosotros</a>
            <a href="#contacto">Contacto</a>
        </div>
    </nav>
</header>
<main>
"##
        ))
        .with_body_end(format!(
            r#"
</main>
<footer class="site-footer">
    <div class="footer-brand">
        <span class="logo">{name}</span>
        <p>{tagline}</p>
    </div>
    <div class="footer-contact">
        <p><i class="fab fa-whatsapp"></i> +{number}</p>
    </div>
</footer>
{scripts}
</body>
</html>"#,
            name = name,
            tagline = html_escape(&business.tagline),
            number = html_escape(&business.whatsapp_number),
            scripts = landing_page_scripts(&business.whatsapp_number, submit_delay),
        ))
}

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

const LANDING_STYLES: &str = r##"
:root {
    --primary: #1e3c72;
    --primary-light: #2a5298;
    --accent: #25d366;
    --bg: #ffffff;
    --bg-alt: #f5f7fa;
    --text: #2c3e50;
    --text-muted: #6c7a89;
    --border: #e1e8ed;
    --gradient: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}

.header {
    position: sticky;
    top: 0;
    background: var(--gradient);
    z-index: 100;
}

.header-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: white;
    text-decoration: none;
}

.nav-links { display: flex; gap: 2rem; }
.nav-links a { color: white; text-decoration: none; font-weight: 500; }

.btn-primary {
    background: var(--accent);
    color: white;
    padding: 0.875rem 1.5rem;
    border: none;
    border-radius: 8px;
    font-weight: 600;
    cursor: pointer;
}

.btn-primary:disabled { opacity: 0.7; cursor: not-allowed; }

.hero {
    padding: 6rem 2rem;
    background: var(--gradient);
    color: white;
    text-align: center;
}

.hero-content { max-width: 800px; margin: 0 auto; }
.hero-headline { font-size: 3rem; font-weight: 800; margin-bottom: 1.5rem; line-height: 1.1; }
.hero-subheadline { font-size: 1.25rem; opacity: 0.9; margin-bottom: 2rem; }

.hero-cta {
    display: inline-block;
    background: white;
    color: var(--primary);
    padding: 1rem 2.5rem;
    border-radius: 8px;
    font-weight: 600;
    text-decoration: none;
}

.hero-badges { margin-top: 2rem; display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.badge { background: rgba(255, 255, 255, 0.15); padding: 0.5rem 1rem; border-radius: 999px; }

section { padding: 5rem 2rem; }
.services, .catalog { background: var(--bg-alt); }

.section-header { text-align: center; max-width: 600px; margin: 0 auto 3rem; }
.section-header h2 { font-size: 2.25rem; margin-bottom: 0.75rem; }
.section-header p { color: var(--text-muted); }

.services-grid, .features-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 2rem;
    max-width: 1200px;
    margin: 0 auto;
}

.service-card, .feature {
    padding: 2rem;
    background: white;
    border-radius: 12px;
    border: 1px solid var(--border);
    text-align: center;
}

.service-card i, .feature i { font-size: 2.5rem; color: var(--primary-light); margin-bottom: 1rem; }

.catalog-filters { max-width: 1200px; margin: 0 auto 2rem; display: flex; flex-direction: column; gap: 1rem; }
.filter-group { display: flex; gap: 0.5rem; flex-wrap: wrap; align-items: center; }
.filter-title { font-weight: 600; margin-right: 0.5rem; }

.filter-btn {
    padding: 0.5rem 1rem;
    border: 1px solid var(--primary-light);
    border-radius: 999px;
    background: white;
    color: var(--primary-light);
    cursor: pointer;
}

.filter-btn.active { background: var(--primary-light); color: white; }
.facet-count { opacity: 0.7; font-size: 0.85em; }

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1.5rem;
    max-width: 1200px;
    margin: 0 auto;
}

.product-card { background: white; border-radius: 12px; overflow: hidden; border: 1px solid var(--border); }
.product-card[hidden] { display: none; }
.product-image img { width: 100%; height: 180px; object-fit: contain; background: #fff; }
.product-info { padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
.product-title { font-size: 1rem; }
.product-tag { color: var(--text-muted); font-size: 0.85rem; }
.product-enquiry { color: var(--accent); font-weight: 600; text-decoration: none; }
.catalog-empty { text-align: center; color: var(--text-muted); }

.contact-form { max-width: 600px; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
.form-group { display: flex; flex-direction: column; gap: 0.25rem; }
.form-group input, .form-group textarea {
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    font: inherit;
}

.error { border-color: #e74c3c !important; }
.error-message { color: #e74c3c; font-size: 0.85rem; margin-top: 5px; }

.notification {
    position: fixed;
    top: 100px;
    right: 20px;
    color: white;
    padding: 15px 20px;
    border-radius: 8px;
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
    z-index: 10000;
    max-width: 400px;
    animation: slideIn 0.3s ease;
}

.notification-content { display: flex; align-items: center; gap: 10px; }
.notification-close { background: none; border: none; color: white; cursor: pointer; margin-left: auto; font-size: 1.2rem; }

.whatsapp-float {
    position: fixed;
    bottom: 24px;
    right: 24px;
    width: 60px;
    height: 60px;
    border-radius: 50%;
    background: var(--accent);
    color: white;
    font-size: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
    z-index: 1000;
}

.site-footer {
    background: var(--primary);
    color: white;
    padding: 3rem 2rem;
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 2rem;
}

.loading { opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease; }
.loaded { opacity: 1; transform: translateY(0); }

@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@media (max-width: 768px) {
    .nav-links { display: none; }
    .hero-headline { font-size: 2.25rem; }
    .notification { right: 10px; left: 10px; max-width: none; }
}
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_section_order() {
        let content = SiteContent::default();
        let catalog = Catalog::standard();
        let html = LandingPage::new(&content, &catalog).render();

        let order = ["hero", "services", "features", "catalog", "contact", "whatsapp"];
        let positions: Vec<usize> = order
            .iter()
            .map(|s| html.find(&format!(r#"data-section="{}""#, s)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(html.contains("<title>CopyServ | Fotocopiadoras Ricoh y Canon</title>"));
        assert!(html.contains("font-awesome"));
        assert!(html.contains("window.COPYSERV"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_page_honours_selection_and_resolver() {
        let content = SiteContent::default();
        let catalog = Catalog::standard();
        let page = LandingPage::new(&content, &catalog)
            .with_selection(FilterSelection::from_raw("all", "insumo"))
            .with_resolver(
                ImagePathResolver::new()
                    .with_root("/static/img")
                    .with_fallback("/static/img/none.jpg"),
            );
        let html = page.render();

        assert!(html.contains(r#"<span id="catalog-count">2</span>"#));
        assert!(html.contains(r#"src="/static/img/insumos/toner-ricoh.jpg""#));
        assert!(html.contains(r#"data-fallback="/static/img/none.jpg""#));
    }

    #[test]
    fn test_business_info_flows_into_shell() {
        let content = SiteContent::new("Tienda").with_business(BusinessInfo {
            name: "Copias & Más".to_string(),
            tagline: "Servicio técnico".to_string(),
            whatsapp_number: "51900000001".to_string(),
        });
        let catalog = Catalog::standard();
        let html = LandingPage::new(&content, &catalog)
            .with_submit_delay(Duration::from_millis(0))
            .render();

        assert!(html.contains("Copias &amp; Más"));
        assert!(html.contains("+51900000001"));
        assert!(html.contains("https://wa.me/51900000001?text="));
        assert!(html.contains("\"submitDelayMs\":0"));
    }
}
