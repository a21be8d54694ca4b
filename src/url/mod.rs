//! URL handling module for soft404
//!
//! Pure helpers that derive the parent-directory URL and the normalized
//! path of an absolute URL. The probe URL is built from the parent.

mod parent;

pub use parent::{parent_url, url_path};
