//! Hero banner section.

use super::html_escape;
use crate::data::HeroContent;

/// Render the hero banner section.
pub fn render_hero(content: &HeroContent) -> String {
    let badges: String = content
        .badges
        .iter()
        .map(|b| format!(r#"<span class="badge">{}</span>"#, html_escape(b)))
        .collect();

    format!(
        r#"<section class="hero" id="inicio" data-section="hero">
    <div class="hero-content">
        <h1 class="hero-headline">{}</h1>
        <p class="hero-subheadline">{}</p>
        <a href="{}" class="hero-cta">{}</a>
        <div class="hero-badges">{}</div>
    </div>
</section>"#,
        html_escape(&content.headline),
        html_escape(&content.subheadline),
        html_escape(&content.cta_url),
        html_escape(&content.cta_text),
        badges
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hero() {
        let html = render_hero(&HeroContent::default());
        assert!(html.contains(r#"data-section="hero""#));
        assert!(html.contains(r##"href="#catalogo""##));
        assert_eq!(html.matches(r#"class="badge""#).count(), 3);
    }
}
