//! Studyline - a terminal client for short lessons and quizzes.
//!
//! The crate drives a lesson player and a quiz over a shared step cursor,
//! gates every screen behind a session token, and talks to a small REST
//! backend for login and profile management.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, session state and DTOs.
pub mod application;
/// Domain layer containing entities, errors, ports and the step machines.
pub mod domain;
/// Infrastructure layer containing the HTTP client, storage, config and content.
pub mod infrastructure;
/// Presentation layer containing screens, widgets and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "studyline";
