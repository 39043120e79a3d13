//! Section renderers for the landing page.

mod catalog;
mod contact;
mod features;
mod hero;
mod notification;

pub use catalog::*;
pub use contact::*;
pub use features::*;
pub use hero::*;
pub use notification::*;

/// Escape text for HTML content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
