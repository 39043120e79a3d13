//! Contact form fields.

use serde::{Deserialize, Serialize};

/// What a visitor typed into the contact form.
///
/// Optional fields are `None` when left blank. A blank or whitespace-only
/// string is treated the same way everywhere, and present values are read
/// trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Visitor name.
    pub name: String,
    /// Phone number as typed.
    pub phone: String,
    /// Optional email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Optional district or address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Problem description.
    pub message: String,
}

impl ContactRequest {
    /// Create a request with the required fields.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
            location: None,
            message: message.into(),
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Email, if one was entered.
    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    /// Location, if one was entered.
    pub fn location(&self) -> Option<&str> {
        non_empty(self.location.as_deref())
    }

    /// Raw value of a form field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => self.email.as_deref().unwrap_or_default(),
            FormField::Location => self.location.as_deref().unwrap_or_default(),
            FormField::Message => &self.message,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// An input on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Phone,
    Email,
    Location,
    Message,
}

impl FormField {
    /// Fields in form order.
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::Location,
        FormField::Message,
    ];

    /// The input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Location => "location",
            FormField::Message => "message",
        }
    }

    /// Visible label.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nombre completo",
            FormField::Phone => "Teléfono / WhatsApp",
            FormField::Email => "Email (opcional)",
            FormField::Location => "Distrito / Ubicación (opcional)",
            FormField::Message => "Describe el problema de tu equipo",
        }
    }

    /// The input's `type` attribute (`textarea` for multi-line input).
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Name | FormField::Location => "text",
            FormField::Phone => "tel",
            FormField::Email => "email",
            FormField::Message => "textarea",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FormField::Name | FormField::Phone | FormField::Message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optionals_are_absent() {
        let req = ContactRequest::new("Ana", "999999999", "No imprime")
            .with_email("")
            .with_location("Miraflores");
        assert_eq!(req.email(), None);
        assert_eq!(req.location(), Some("Miraflores"));
        assert_eq!(req.value(FormField::Email), "");
    }

    #[test]
    fn test_optionals_are_trimmed() {
        let req = ContactRequest::new("Ana", "999999999", "No imprime")
            .with_email(" ana@example.pe ")
            .with_location("\t ");
        assert_eq!(req.email(), Some("ana@example.pe"));
        assert_eq!(req.location(), None);
    }

    #[test]
    fn test_deserialize_without_optionals() {
        let req: ContactRequest = serde_json::from_str(
            r#"{"name": "Ana", "phone": "999 999 999", "message": "Atasco de papel"}"#,
        )
        .unwrap();
        assert_eq!(req.email, None);
        assert_eq!(req.value(FormField::Phone), "999 999 999");
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = FormField::ALL
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.as_str())
            .collect();
        assert_eq!(required, vec!["name", "phone", "message"]);
    }
}
