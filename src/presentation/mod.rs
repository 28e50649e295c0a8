//! Presentation layer with screens, widgets and event handling.

/// Key event helpers.
pub mod events;
/// Screens and the app loop.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::{App, AppSettings};
