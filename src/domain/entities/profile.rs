//! Learner profile entity.

use serde::{Deserialize, Serialize};

/// Profile data returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    name: String,
    email: String,
}

impl UserProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Display name; may be empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email; may be empty.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Name shown in headers, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Returns whether both fields are blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}
