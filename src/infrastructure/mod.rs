//! Infrastructure layer with external service adapters.

/// Learning backend REST client.
pub mod api;
/// Application configuration.
pub mod config;
/// Lesson and quiz catalog sources.
pub mod content;
/// Token storage adapters.
pub mod storage;

pub use api::ApiClient;
pub use config::{AppConfig, CliArgs, ConfigStore, LogLevel};
pub use content::{CatalogError, builtin_catalog, resolve_catalog};
pub use storage::KeyringTokenStorage;
