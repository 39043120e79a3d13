//! Media module.
//!
//! Slug derivation and image path resolution for catalog items.

mod path;
mod slug;

pub use path::{
    folder_for, resolve_path, ImagePath, ImagePathResolver, SlugRule, FALLBACK_IMAGE,
    IMAGE_EXTENSION, IMAGE_ROOT, SLUG_OVERRIDES,
};
pub use slug::slugify;
