//! Application configuration.

/// Configuration file model.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Reading and writing the config file.
pub mod storage;

pub use app_config::{ApiConfig, AppConfig, LessonSettings, LogLevel, QuizSettings};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigStore};
