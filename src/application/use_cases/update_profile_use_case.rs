//! Profile update use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{ProfileForm, SaveOutcome};
use crate::application::services::SessionManager;
use crate::domain::errors::{AuthError, ValidationError};
use crate::domain::ports::ProfilePort;

/// Validates the profile form and sends only the changed fields.
#[derive(Clone)]
pub struct UpdateProfileUseCase {
    profile_port: Arc<dyn ProfilePort>,
    session: SessionManager,
}

impl UpdateProfileUseCase {
    /// Creates the use case.
    #[must_use]
    pub fn new(profile_port: Arc<dyn ProfilePort>, session: SessionManager) -> Self {
        Self {
            profile_port,
            session,
        }
    }

    /// Saves the form.
    ///
    /// An unchanged form returns [`SaveOutcome::NoChanges`] without a request.
    ///
    /// # Errors
    /// Returns validation errors, [`AuthError::SessionExpired`] after an
    /// unauthorized response (the session is signed out), or transport errors.
    pub async fn execute(&self, form: &ProfileForm) -> Result<SaveOutcome, AuthError> {
        Self::validate(form)?;

        let update = form.changes();
        if update.is_empty() {
            debug!("Profile form unchanged, nothing to save");
            return Ok(SaveOutcome::NoChanges);
        }

        let token = self.session.token().ok_or(AuthError::NoTokenAvailable)?;

        match self.profile_port.update_profile(&token, &update).await {
            Ok(()) => {
                info!(
                    name_changed = update.name.is_some(),
                    email_changed = update.email.is_some(),
                    "Profile updated"
                );
                Ok(SaveOutcome::Saved(update))
            }
            Err(e) if e.is_unauthorized() => {
                self.session.invalidate().await;
                Err(AuthError::SessionExpired)
            }
            Err(e) => {
                warn!(error = %e, "Failed to update profile");
                Err(e)
            }
        }
    }

    fn validate(form: &ProfileForm) -> Result<(), ValidationError> {
        if form.name.trim().is_empty() {
            return Err(ValidationError::empty("name"));
        }
        let email = form.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(ValidationError::MalformedEmail);
        }
        Ok(())
    }
}
