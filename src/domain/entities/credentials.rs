//! Login credentials.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::errors::ValidationError;

/// Email/password pair submitted to the login endpoint.
///
/// Both fields are wiped from memory when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validates and builds credentials.
    ///
    /// # Errors
    /// Returns [`ValidationError`] when a field is empty or the email is malformed.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into().trim().to_string();
        let password = password.into();

        if email.is_empty() {
            return Err(ValidationError::empty("email"));
        }
        if password.is_empty() {
            return Err(ValidationError::empty("password"));
        }
        if !is_plausible_email(&email) {
            return Err(ValidationError::MalformedEmail);
        }

        Ok(Self { email, password })
    }

    /// Trimmed email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password as entered.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Loose email shape check: something on both sides of a single `@`.
#[must_use]
fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let creds = Credentials::new(" ana@example.com ", "hunter2").unwrap();
        assert_eq!(creds.email(), "ana@example.com");
        assert_eq!(creds.password(), "hunter2");
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = Credentials::new("ana@example.com", "").unwrap_err();
        assert_eq!(err, ValidationError::empty("password"));
    }

    #[test]
    fn test_empty_email_rejected() {
        let err = Credentials::new("  ", "pw").unwrap_err();
        assert_eq!(err, ValidationError::empty("email"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        assert_eq!(
            Credentials::new("ana.example.com", "pw").unwrap_err(),
            ValidationError::MalformedEmail
        );
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("ana@"));
        assert!(!is_plausible_email("a@b@c"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("ana@example.com", "hunter2").unwrap();
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
