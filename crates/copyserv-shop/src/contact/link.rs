//! Outbound chat links.

use std::time::Duration;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::contact::{compose_message, product_enquiry, validate, ContactRequest};
use crate::error::ShopError;

/// The shop's WhatsApp number, in international format without `+`.
pub const WHATSAPP_NUMBER: &str = "51977851120";

/// Pause shown before the chat opens after a form submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Build a `wa.me` link that opens a chat prefilled with `message`.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(message)
    )
}

/// Chat link for a product enquiry.
pub fn product_enquiry_link(number: &str, product_name: &str) -> String {
    whatsapp_link(number, &product_enquiry(product_name))
}

/// A validated request, ready to hand to the chat app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// The composed message.
    pub message: String,
    /// The prefilled chat link.
    pub link: String,
}

impl Submission {
    /// Validate `request` and build its message and chat link.
    ///
    /// Fails with [`ShopError::InvalidContact`] carrying every validation
    /// error when the request does not pass.
    pub fn prepare(
        request: &ContactRequest,
        number: &str,
        at: NaiveDateTime,
    ) -> Result<Self, ShopError> {
        let report = validate(request);
        if !report.is_valid() {
            return Err(ShopError::InvalidContact(report.errors));
        }

        let message = compose_message(request, at);
        let link = whatsapp_link(number, &message);
        Ok(Self { message, link })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_link_encoding() {
        let link = whatsapp_link(WHATSAPP_NUMBER, "Hola, ¿precio?\nGracias");
        assert_eq!(
            link,
            "https://wa.me/51977851120?text=Hola%2C%20%C2%BFprecio%3F%0AGracias"
        );
    }

    #[test]
    fn test_product_enquiry_link() {
        let link = product_enquiry_link(WHATSAPP_NUMBER, "Canon 256");
        assert!(link.starts_with("https://wa.me/51977851120?text=Hola%2C%20deseo%20"));
        assert!(link.ends_with("producto%3A%20Canon%20256"));
    }

    #[test]
    fn test_prepare_valid() {
        let req = ContactRequest::new("Ana Lopez", "977851120", "La copiadora hace ruido");
        let submission = Submission::prepare(&req, WHATSAPP_NUMBER, at()).unwrap();
        assert!(submission.message.contains("*Nombre:* Ana Lopez"));
        assert!(submission.link.contains("Ana%20Lopez"));
    }

    #[test]
    fn test_prepare_invalid() {
        let req = ContactRequest::new("Al", "abc", "La copiadora hace ruido");
        let err = Submission::prepare(&req, WHATSAPP_NUMBER, at()).unwrap_err();
        match err {
            ShopError::InvalidContact(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
