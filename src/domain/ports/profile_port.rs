//! Profile port definition.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{AuthToken, UserProfile};
use crate::domain::errors::AuthError;

/// Partial profile update; only changed fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// Returns whether no field changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Port for authenticated profile operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfilePort: Send + Sync {
    /// Fetches the signed-in user's profile; `None` when the backend returns no data.
    async fn fetch_profile(&self, token: &AuthToken) -> Result<Option<UserProfile>, AuthError>;

    /// Applies a partial update.
    async fn update_profile(
        &self,
        token: &AuthToken,
        update: &ProfileUpdate,
    ) -> Result<(), AuthError>;
}
