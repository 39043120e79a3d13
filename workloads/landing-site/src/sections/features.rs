//! Services and "why us" sections.

use super::html_escape;
use crate::data::{Card, FeaturesContent, ServicesContent};

fn render_card(card: &Card, class: &str) -> String {
    format!(
        r#"<div class="{}">
            <i class="fas {}"></i>
            <h3>{}</h3>
            <p>{}</p>
        </div>"#,
        class,
        html_escape(&card.icon),
        html_escape(&card.title),
        html_escape(&card.description)
    )
}

/// Render the services section.
pub fn render_services(content: &ServicesContent) -> String {
    let cards: String = content
        .services
        .iter()
        .map(|s| render_card(s, "service-card"))
        .collect();

    format!(
        r#"<section class="services" id="servicios" data-section="services">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <div class="services-grid">
        {}
    </div>
</section>"#,
        html_escape(&content.section_title),
        html_escape(&content.section_subtitle),
        cards
    )
}

/// Render the "why us" section.
pub fn render_features(content: &FeaturesContent) -> String {
    let features: String = content
        .features
        .iter()
        .map(|f| render_card(f, "feature"))
        .collect();

    format!(
        r#"<section class="features" id="nosotros" data-section="features">
    <div class="section-header">
        <h2>{}</h2>
    </div>
    <div class="features-grid">
        {}
    </div>
</section>"#,
        html_escape(&content.section_title),
        features
    )
}
