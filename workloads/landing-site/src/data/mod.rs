//! Content models for the landing page.

mod content;

pub use content::*;
