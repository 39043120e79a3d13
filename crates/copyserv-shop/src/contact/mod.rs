//! Contact module.
//!
//! The contact form's fields, validation rules, message composition and the
//! chat link a submission opens.

mod form;
mod link;
mod message;
mod validation;

pub use form::{ContactRequest, FormField};
pub use link::{
    product_enquiry_link, whatsapp_link, Submission, SUBMIT_DELAY, WHATSAPP_NUMBER,
};
pub use message::{
    compose_message, format_time, product_enquiry, DATE_FORMAT, TIME_AM, TIME_FORMAT, TIME_PM,
};
pub use validation::{
    is_valid_email, is_valid_phone, validate, validate_field, ValidationReport,
    EMAIL_INVALID, MESSAGE_TOO_SHORT, MIN_MESSAGE_CHARS, MIN_NAME_CHARS, MIN_PHONE_DIGITS,
    NAME_TOO_SHORT, PHONE_FIELD_INVALID, PHONE_INVALID,
};
