//! Top-level navigation targets decided outside the UI.

/// Where the user lands after a session decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Credential entry.
    Login,
    /// Authenticated home (catalog).
    Home,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Home => write!(f, "home"),
        }
    }
}
