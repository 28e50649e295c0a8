//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Navigation targets.
pub mod route;
/// Lesson and quiz state machines.
pub mod services;

pub use entities::{AuthToken, Catalog, Credentials, Lesson, LessonPart, UserProfile};
pub use errors::{AuthError, ValidationError};
pub use ports::{AuthPort, ProfilePort, TokenStoragePort};
pub use route::Route;
