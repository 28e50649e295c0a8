//! Domain error types.

mod auth_error;
mod secret_error;
mod validation_error;

pub use auth_error::AuthError;
pub use secret_error::SecretError;
pub use validation_error::ValidationError;
