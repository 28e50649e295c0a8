//! Form validation error types.

use thiserror::Error;

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// The email address has no recognisable `local@domain` shape.
    #[error("please enter a valid email address")]
    MalformedEmail,
}

impl ValidationError {
    /// Creates empty field error.
    #[must_use]
    pub const fn empty(field: &'static str) -> Self {
        Self::EmptyField { field }
    }
}
