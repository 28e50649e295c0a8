//! Lesson and quiz catalog sources.

mod builtin;
mod loader;

pub use builtin::builtin_catalog;
pub use loader::{CatalogError, load_catalog, resolve_catalog};
