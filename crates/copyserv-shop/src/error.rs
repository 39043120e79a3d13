//! Shop error types.

use thiserror::Error;

/// Errors that can occur in shop operations.
///
/// Form input problems are not errors: they are collected in a
/// [`ValidationReport`](crate::contact::ValidationReport). `InvalidContact`
/// only surfaces when a caller asks to submit a request that did not pass
/// validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Contact request failed validation.
    #[error("Invalid contact request: {}", .0.join("; "))]
    InvalidContact(Vec<String>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ShopError {
    fn from(e: serde_json::Error) -> Self {
        ShopError::Serialization(e.to_string())
    }
}
