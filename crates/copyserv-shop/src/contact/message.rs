//! Chat message composition.

use chrono::{NaiveDateTime, Timelike};

use crate::contact::ContactRequest;

/// Date layout used in messages (`16/10/2026`, no zero padding).
pub const DATE_FORMAT: &str = "%-d/%-m/%Y";

/// Time layout used in messages (`9:05:07`, 12-hour clock). The day period
/// follows it, see [`format_time`].
pub const TIME_FORMAT: &str = "%-I:%M:%S";

/// Day periods as the `es-PE` locale writes them.
pub const TIME_AM: &str = "a. m.";
pub const TIME_PM: &str = "p. m.";

const HEADER: &str = "📋 *Solicitud de Servicio Técnico*";
const CLOSING: &str = "Por favor, necesito asistencia técnica para mi fotocopiadora. ¡Gracias!";

/// Compose the service request message sent to the shop's chat.
///
/// Email and location lines are left out entirely when those fields are
/// blank, and are inserted trimmed otherwise. Other field values are inserted
/// as typed.
pub fn compose_message(request: &ContactRequest, at: NaiveDateTime) -> String {
    let mut lines = vec![
        HEADER.to_string(),
        String::new(),
        format!("👤 *Nombre:* {}", request.name),
        format!("📞 *Teléfono:* {}", request.phone),
    ];

    if let Some(email) = request.email() {
        lines.push(format!("📧 *Email:* {}", email));
    }

    if let Some(location) = request.location() {
        lines.push(format!("📍 *Ubicación:* {}", location));
    }

    lines.push(format!("🔧 *Descripción del problema:* {}", request.message));
    lines.push(String::new());
    lines.push(format!("📅 *Fecha:* {}", at.format(DATE_FORMAT)));
    lines.push(format!("⏰ *Hora:* {}", format_time(at)));
    lines.push(String::new());
    lines.push(CLOSING.to_string());

    lines.join("\n")
}

/// Clock time in the `es-PE` style: `5:30:00 p. m.`.
pub fn format_time(at: NaiveDateTime) -> String {
    let period = if at.hour() < 12 { TIME_AM } else { TIME_PM };
    format!("{} {}", at.format(TIME_FORMAT), period)
}

/// Message sent when a visitor asks about a catalog item.
pub fn product_enquiry(product_name: &str) -> String {
    format!("Hola, deseo información del producto: {}", product_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_full_message() {
        let req = ContactRequest::new("Ana Lopez", "977 851 120", "Atasco de papel en bandeja 2")
            .with_email("ana@example.pe")
            .with_location("San Isidro");

        let expected = "📋 *Solicitud de Servicio Técnico*\n\
\n\
👤 *Nombre:* Ana Lopez\n\
📞 *Teléfono:* 977 851 120\n\
📧 *Email:* ana@example.pe\n\
📍 *Ubicación:* San Isidro\n\
🔧 *Descripción del problema:* Atasco de papel en bandeja 2\n\
\n\
📅 *Fecha:* 5/3/2026\n\
⏰ *Hora:* 9:05:07 a. m.\n\
\n\
Por favor, necesito asistencia técnica para mi fotocopiadora. ¡Gracias!";

        assert_eq!(compose_message(&req, at()), expected);
    }

    #[test]
    fn test_optional_lines_omitted() {
        let req = ContactRequest::new("Ana Lopez", "977851120", "Atasco de papel")
            .with_location("");
        let message = compose_message(&req, at());

        assert!(message.contains("*Nombre:* Ana Lopez"));
        assert!(message.contains("*Teléfono:* 977851120"));
        assert!(message.contains("*Descripción del problema:* Atasco de papel"));
        assert!(message.contains("*Fecha:*"));
        assert!(message.contains("*Hora:*"));
        assert!(!message.contains("Email"));
        assert!(!message.contains("Ubicación"));
        assert!(!message.contains("\n\n\n"));
    }

    #[test]
    fn test_optional_lines_are_trimmed() {
        let req = ContactRequest::new("Ana Lopez", "977851120", "Atasco de papel")
            .with_email("  ana@example.pe ")
            .with_location("   ");
        let message = compose_message(&req, at());

        assert!(message.contains("📧 *Email:* ana@example.pe\n"));
        assert!(!message.contains("Ubicación"));
    }

    #[test]
    fn test_afternoon_uses_day_period() {
        let afternoon = NaiveDate::from_ymd_opt(2026, 12, 24)
            .unwrap()
            .and_hms_opt(17, 30, 0)
            .unwrap();
        let message = compose_message(&ContactRequest::new("Ana", "977851120", "x"), afternoon);
        assert!(message.contains("📅 *Fecha:* 24/12/2026"));
        assert!(message.contains("⏰ *Hora:* 5:30:00 p. m."));
    }

    #[test]
    fn test_format_time_noon_and_midnight() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(format_time(day.and_hms_opt(0, 0, 9).unwrap()), "12:00:09 a. m.");
        assert_eq!(format_time(day.and_hms_opt(12, 1, 0).unwrap()), "12:01:00 p. m.");
        assert_eq!(format_time(day.and_hms_opt(23, 59, 59).unwrap()), "11:59:59 p. m.");
    }

    #[test]
    fn test_product_enquiry() {
        assert_eq!(
            product_enquiry("Toner Canon"),
            "Hola, deseo información del producto: Toner Canon"
        );
    }
}
