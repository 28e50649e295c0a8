//! User-facing messages returned instead of blocking alerts.

use crate::domain::errors::AuthError;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Message shown to the user until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// How the notice is styled.
    pub level: NoticeLevel,
    /// Short heading, shown in the popup border.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notice {
    /// Creates a notice at the given level.
    #[must_use]
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Informational notice.
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    /// Success notice.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    /// Warning notice.
    #[must_use]
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    /// Error notice.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    /// Maps an error to the message the triggering screen shows.
    #[must_use]
    pub fn from_error(error: &AuthError) -> Self {
        match error {
            AuthError::Validation(e) => Self::warning("Check the form", e.to_string()),
            AuthError::InvalidCredentials => Self::error("Login failed", "Incorrect password."),
            AuthError::UserNotFound => Self::error("Login failed", "User not found."),
            AuthError::MissingToken => Self::error("Login failed", "Token not received."),
            AuthError::SessionExpired | AuthError::NoTokenAvailable => {
                Self::warning("Session expired", "Please log in again.")
            }
            AuthError::NetworkError { .. } => Self::error(
                "Connection problem",
                "Could not reach the server. Check your connection or try again later.",
            ),
            AuthError::Server { status, message } if *status < 500 && !message.is_empty() => {
                Self::error("Request failed", message.clone())
            }
            e if e.is_network_error() => Self::error(
                "Server error",
                "The server could not complete the request. Try again later.",
            ),
            other => Self::error("Error", other.to_string()),
        }
    }
}

/// Yes/no confirmation the caller resolves before acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    /// Question heading.
    pub title: String,
    /// What the user is asked to confirm.
    pub message: String,
}

impl Dialog {
    /// Creates a yes/no confirmation.
    #[must_use]
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Resolves the dialog from a key press: `Some(true)` on y/Enter,
    /// `Some(false)` on n/Esc, `None` for anything else.
    #[must_use]
    pub const fn resolve(key: char) -> Option<bool> {
        match key {
            'y' | 'Y' | '\n' => Some(true),
            'n' | 'N' | '\u{1b}' => Some(false),
            _ => None,
        }
    }
}
