//! Session token kept in the platform credential store.
//!
//! Without the `keyring` feature nothing is persisted and every run starts
//! signed out unless a token is passed on the command line.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::{AuthError, SecretError};
use crate::domain::ports::{TOKEN_KEY, TokenStoragePort};

const SERVICE: &str = "studyline";

/// [`TokenStoragePort`] over the OS keyring, entry `studyline` / `userToken`.
#[derive(Debug, Clone)]
pub struct KeyringTokenStorage {
    service: String,
}

impl KeyringTokenStorage {
    /// Storage under the `studyline` service.
    #[must_use]
    pub fn new() -> Self {
        Self::for_service(SERVICE)
    }

    /// Uses a different keyring service, keeping the `userToken` account.
    #[must_use]
    pub fn for_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Runs a blocking keyring call off the async runtime.
    async fn blocking<T, F>(&self, op: &'static str, call: F) -> Result<T, SecretError>
    where
        T: Send + 'static,
        F: FnOnce(&str) -> Result<T, SecretError> + Send + 'static,
    {
        let service = self.service.clone();
        let result = tokio::task::spawn_blocking(move || call(&service))
            .await
            .map_err(|e| SecretError::AccessFailed(e.to_string()))
            .and_then(|inner| inner);

        if let Err(e) = &result {
            warn!(service = %self.service, op, error = %e, "Keyring call failed");
        }
        result
    }
}

impl Default for KeyringTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "keyring")]
mod backend {
    use keyring::{Entry, Error};

    use super::{SecretError, TOKEN_KEY};

    fn entry(service: &str) -> Result<Entry, SecretError> {
        Entry::new(service, TOKEN_KEY).map_err(|e| SecretError::AccessFailed(e.to_string()))
    }

    pub(super) fn read(service: &str) -> Result<Option<String>, SecretError> {
        match entry(service)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(Error::NoEntry) => Ok(None),
            Err(e) => Err(SecretError::RetrievalFailed(e.to_string())),
        }
    }

    pub(super) fn write(service: &str, secret: &str) -> Result<(), SecretError> {
        entry(service)?
            .set_password(secret)
            .map_err(|e| SecretError::StorageFailed(e.to_string()))
    }

    pub(super) fn remove(service: &str) -> Result<(), SecretError> {
        match entry(service)?.delete_credential() {
            Ok(()) | Err(Error::NoEntry) => Ok(()),
            Err(e) => Err(SecretError::DeletionFailed(e.to_string())),
        }
    }
}

#[cfg(not(feature = "keyring"))]
mod backend {
    use super::SecretError;

    #[allow(clippy::unnecessary_wraps)]
    pub(super) const fn read(_service: &str) -> Result<Option<String>, SecretError> {
        Ok(None)
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(super) const fn write(_service: &str, _secret: &str) -> Result<(), SecretError> {
        Ok(())
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(super) const fn remove(_service: &str) -> Result<(), SecretError> {
        Ok(())
    }
}

#[async_trait]
impl TokenStoragePort for KeyringTokenStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, AuthError> {
        let secret = self.blocking("read", backend::read).await?;
        debug!(service = %self.service, found = secret.is_some(), "Keyring lookup");
        Ok(secret.and_then(AuthToken::new))
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), AuthError> {
        let secret = zeroize::Zeroizing::new(token.as_str().to_string());
        self.blocking("write", move |service| backend::write(service, &secret))
            .await?;
        debug!(service = %self.service, token = %token, "Token saved to keyring");
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), AuthError> {
        self.blocking("remove", backend::remove).await?;
        debug!(service = %self.service, "Keyring entry cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "keyring")]
    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_round_trip_and_clear() {
        let storage = KeyringTokenStorage::for_service("studyline-test");
        let token = AuthToken::new_unchecked("eyJhbGciOiJIUzI1NiJ9.test-payload.signature");

        storage.store_token(&token).await.unwrap();
        assert_eq!(storage.get_token().await.unwrap(), Some(token));

        storage.delete_token().await.unwrap();
        assert!(storage.get_token().await.unwrap().is_none());
        storage.delete_token().await.unwrap();
    }

    #[cfg(not(feature = "keyring"))]
    #[tokio::test]
    async fn test_without_keyring_nothing_persists() {
        let storage = KeyringTokenStorage::new();
        storage
            .store_token(&AuthToken::new_unchecked("session-token"))
            .await
            .unwrap();
        assert!(!storage.has_token().await.unwrap());
        storage.delete_token().await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_call_reports_secret_error() {
        let storage = KeyringTokenStorage::for_service("studyline-test");
        let err = storage
            .blocking("read", |_: &str| -> Result<(), SecretError> {
                Err(SecretError::RetrievalFailed("locked".into()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SecretError::RetrievalFailed(_)));
    }
}
