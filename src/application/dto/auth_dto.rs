//! Authentication DTOs.

use zeroize::Zeroizing;

/// Source of the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token from the system keyring.
    Keyring,
    /// Token from command line or environment.
    CommandLine,
}

impl TokenSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Keyring => "system keyring",
            Self::CommandLine => "command line / environment",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Login form submission.
#[derive(Clone)]
pub struct LoginRequest {
    /// Email as typed.
    pub email: String,
    /// Password as typed.
    pub password: Zeroizing<String>,
    /// Whether to persist the issued token.
    pub persist_token: bool,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            persist_token: true,
        }
    }

    /// Disables token persistence.
    #[must_use]
    pub const fn without_persistence(mut self) -> Self {
        self.persist_token = false;
        self
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("persist_token", &self.persist_token)
            .finish_non_exhaustive()
    }
}

/// Login result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginResponse {
    /// Whether token was persisted.
    pub token_persisted: bool,
}
