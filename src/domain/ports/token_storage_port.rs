//! Session token persistence port.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::AuthError;

/// Key under which the session token is persisted.
pub const TOKEN_KEY: &str = "userToken";

/// Port for the local credential store.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Reads the persisted token, if any.
    async fn get_token(&self) -> Result<Option<AuthToken>, AuthError>;

    /// Persists the token, replacing any previous one.
    async fn store_token(&self, token: &AuthToken) -> Result<(), AuthError>;

    /// Removes the persisted token. Succeeds when nothing is stored.
    async fn delete_token(&self) -> Result<(), AuthError>;

    /// Checks if token exists.
    async fn has_token(&self) -> Result<bool, AuthError> {
        Ok(self.get_token().await?.is_some())
    }
}
