//! Authentication and account API error types.

use thiserror::Error;

use super::{SecretError, ValidationError};

/// Errors raised by login, session and profile operations.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("no account found for this email")]
    UserNotFound,

    #[error("login succeeded but no token was returned")]
    MissingToken,

    #[error("session expired, please log in again")]
    SessionExpired,

    #[error("no authentication token available")]
    NoTokenAvailable,

    #[error("network error: {message}")]
    NetworkError { message: String },

    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },

    #[error("secure storage error: {0}")]
    Secret(#[from] SecretError),

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the stored token must be discarded.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::NoTokenAvailable)
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
            || matches!(self, Self::Server { status, .. } if *status >= 500)
    }

    /// Returns whether the user can fix the error by editing the form.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_classification() {
        assert!(AuthError::SessionExpired.is_unauthorized());
        assert!(AuthError::NoTokenAvailable.is_unauthorized());
        assert!(!AuthError::InvalidCredentials.is_unauthorized());
    }

    #[test]
    fn test_server_errors_count_as_network() {
        assert!(AuthError::server(503, "down").is_network_error());
        assert!(!AuthError::server(422, "bad").is_network_error());
        assert!(AuthError::network("timeout").is_network_error());
    }

    #[test]
    fn test_validation_converts() {
        let err: AuthError = ValidationError::MalformedEmail.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "please enter a valid email address");
    }
}
