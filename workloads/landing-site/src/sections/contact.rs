//! Contact form section and the floating chat button.

use copyserv_shop::contact::{whatsapp_link, FormField};

use super::html_escape;

/// Render the contact form section.
pub fn render_contact() -> String {
    let fields: String = FormField::ALL.iter().map(|f| render_field(*f)).collect();

    format!(
        r#"<section class="contact" id="contacto" data-section="contact">
    <div class="section-header">
        <h2>Contáctanos</h2>
        <p>Cuéntanos qué necesita tu equipo y te respondemos por WhatsApp.</p>
    </div>
    <form class="contact-form" id="contactForm" novalidate>
        {}
        <button type="submit" class="btn-primary">
            <i class="fab fa-whatsapp"></i> Enviar mensaje
        </button>
    </form>
</section>"#,
        fields
    )
}

fn render_field(field: FormField) -> String {
    let name = field.as_str();
    let required = if field.is_required() { " required" } else { "" };
    let input = match field.input_type() {
        "textarea" => format!(
            r#"<textarea id="{name}" name="{name}" rows="4"{required}></textarea>"#
        ),
        ty => format!(r#"<input type="{ty}" id="{name}" name="{name}"{required}>"#),
    };

    format!(
        r#"<div class="form-group">
            <label for="{}">{}</label>
            {}
        </div>"#,
        name,
        html_escape(field.label()),
        input
    )
}

/// Render the floating chat button.
pub fn render_whatsapp_float(number: &str) -> String {
    let link = whatsapp_link(number, "Hola, necesito información sobre sus servicios");
    format!(
        r#"<a href="{}" class="whatsapp-float" target="_blank" rel="noopener" aria-label="WhatsApp" data-section="whatsapp">
    <i class="fab fa-whatsapp"></i>
</a>"#,
        html_escape(&link)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_fields() {
        let html = render_contact();
        assert!(html.contains(r#"id="contactForm""#));
        assert!(html.contains(r#"<input type="text" id="name" name="name" required>"#));
        assert!(html.contains(r#"<input type="tel" id="phone" name="phone" required>"#));
        assert!(html.contains(r#"<input type="email" id="email" name="email">"#));
        assert!(html.contains(r#"<input type="text" id="location" name="location">"#));
        assert!(html.contains(r#"<textarea id="message" name="message" rows="4" required>"#));
        assert!(html.contains("Teléfono / WhatsApp"));
    }

    #[test]
    fn test_whatsapp_float() {
        let html = render_whatsapp_float("51900000000");
        assert!(html.contains(r#"href="https://wa.me/51900000000?text=Hola%2C%20"#));
        assert!(html.contains("whatsapp-float"));
    }
}
