//! Contact form validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::contact::{ContactRequest, FormField};

/// Minimum trimmed name length, in characters.
pub const MIN_NAME_CHARS: usize = 3;

/// Minimum trimmed description length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 9;

pub const NAME_TOO_SHORT: &str = "El nombre debe tener al menos 3 caracteres";
pub const PHONE_INVALID: &str = "Por favor, ingrese un número de teléfono válido";
pub const PHONE_FIELD_INVALID: &str = "Ingrese un número de teléfono válido";
pub const MESSAGE_TOO_SHORT: &str = "La descripción debe tener al menos 10 caracteres";
pub const EMAIL_INVALID: &str = "Ingrese un email válido";

static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern compiles"));

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check a phone number: only digits, spaces, `-`, `+`, `(`, `)`, and at
/// least nine digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_CHARS.is_match(phone)
        && phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

/// Check an email against a `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Every violation, in form order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All errors as one notice, separated by `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.errors.join(separator)
    }

    fn push(&mut self, error: &str) {
        self.errors.push(error.to_string());
    }
}

/// Validate a whole contact request, collecting every violation.
pub fn validate(request: &ContactRequest) -> ValidationReport {
    let mut report = ValidationReport::default();

    if request.name.trim().chars().count() < MIN_NAME_CHARS {
        report.push(NAME_TOO_SHORT);
    }

    if !is_valid_phone(&request.phone) {
        report.push(PHONE_INVALID);
    }

    if request.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        report.push(MESSAGE_TOO_SHORT);
    }

    if let Some(email) = request.email() {
        if !is_valid_email(email) {
            report.push(EMAIL_INVALID);
        }
    }

    report
}

/// Validate a single input the way the form does on blur.
///
/// The value is trimmed first. Returns the message to show under the field.
pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    match field {
        FormField::Name if value.chars().count() < MIN_NAME_CHARS => Some(NAME_TOO_SHORT),
        FormField::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            Some(MESSAGE_TOO_SHORT)
        }
        FormField::Phone if !is_valid_phone(value) => Some(PHONE_FIELD_INVALID),
        FormField::Email if !value.is_empty() && !is_valid_email(value) => Some(EMAIL_INVALID),
        _ => None,
    }
}

impl ContactRequest {
    /// Validate this request.
    pub fn validate(&self) -> ValidationReport {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_only() {
        let report = validate(&ContactRequest::new("Al", "999999999", "1234567890"));
        assert!(!report.is_valid());
        assert_eq!(report.errors, vec![NAME_TOO_SHORT.to_string()]);
    }

    #[test]
    fn test_bad_phone_only() {
        let report = validate(&ContactRequest::new(
            "Ana Lopez",
            "abc",
            "Se malogró la copiadora",
        ));
        assert_eq!(report.errors, vec![PHONE_INVALID.to_string()]);
    }

    #[test]
    fn test_accumulates_all_errors() {
        let req = ContactRequest::new(" a ", "12", "corto").with_email("no-at-sign");
        let report = validate(&req);
        assert_eq!(
            report.errors,
            vec![
                NAME_TOO_SHORT.to_string(),
                PHONE_INVALID.to_string(),
                MESSAGE_TOO_SHORT.to_string(),
                EMAIL_INVALID.to_string(),
            ]
        );
        assert_eq!(report.joined("<br>").matches("<br>").count(), 3);
    }

    #[test]
    fn test_valid_request() {
        let req = ContactRequest::new("José", "+51 (977) 851-120", "La copiadora no enciende")
            .with_email("jose@example.pe");
        assert!(req.validate().is_valid());
    }

    #[test]
    fn test_empty_email_is_valid() {
        let req = ContactRequest::new("José", "977851120", "La copiadora no enciende")
            .with_email("");
        assert!(req.validate().is_valid());
    }

    #[test]
    fn test_padded_email_matches_field_check() {
        let padded = ContactRequest::new("Ana Lopez", "977851120", "Atasco de papel")
            .with_email(" ana@example.pe ");
        assert!(padded.validate().is_valid());
        assert_eq!(validate_field(FormField::Email, " ana@example.pe "), None);

        let blank = ContactRequest::new("Ana Lopez", "977851120", "Atasco de papel")
            .with_email("   ");
        assert!(blank.validate().is_valid());
        assert_eq!(validate_field(FormField::Email, "   "), None);
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("977 851 120"));
        assert!(is_valid_phone("(01) 555-1234"));
        assert!(!is_valid_phone("97785112"));
        assert!(!is_valid_phone("977851120 ext"));
        assert!(!is_valid_phone(""));
        // Non-ASCII digits are not accepted.
        assert!(!is_valid_phone("٩٧٧٨٥١١٢٠"));
    }

    #[test]
    fn test_lengths_count_characters() {
        // "Íñi" is three characters but more than three bytes.
        let req = ContactRequest::new("Íñi", "977851120", "ñññññññññ");
        assert_eq!(req.validate().errors, vec![MESSAGE_TOO_SHORT.to_string()]);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
    }

    #[test]
    fn test_validate_field() {
        assert_eq!(validate_field(FormField::Name, "  Al  "), Some(NAME_TOO_SHORT));
        assert_eq!(validate_field(FormField::Name, "Ana"), None);
        assert_eq!(validate_field(FormField::Phone, ""), Some(PHONE_FIELD_INVALID));
        assert_eq!(validate_field(FormField::Email, "   "), None);
        assert_eq!(validate_field(FormField::Email, "x@"), Some(EMAIL_INVALID));
        assert_eq!(validate_field(FormField::Location, ""), None);
        assert_eq!(
            validate_field(FormField::Message, "corto"),
            Some(MESSAGE_TOO_SHORT)
        );
    }
}
