//! Profile DTOs.

use crate::domain::entities::UserProfile;
use crate::domain::ports::ProfileUpdate;

/// Editable profile form with the last values known to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Name as typed.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Name last loaded from or saved to the server.
    pub current_name: String,
    /// Email last loaded from or saved to the server.
    pub current_email: String,
}

impl ProfileForm {
    /// Creates a form populated from a fetched profile.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name().to_string(),
            email: profile.email().to_string(),
            current_name: profile.name().to_string(),
            current_email: profile.email().to_string(),
        }
    }

    /// Fields that differ from the server values, after trimming.
    #[must_use]
    pub fn changes(&self) -> ProfileUpdate {
        let name = self.name.trim();
        let email = self.email.trim();

        ProfileUpdate {
            name: (name != self.current_name).then(|| name.to_string()),
            email: (email != self.current_email).then(|| email.to_string()),
        }
    }

    /// Returns whether saving would send anything.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.changes().is_empty()
    }

    /// Records a successful save as the new server values.
    pub fn apply_saved(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.current_name.clone_from(name);
            self.name.clone_from(name);
        }
        if let Some(email) = &update.email {
            self.current_email.clone_from(email);
            self.email.clone_from(email);
        }
    }
}

/// Outcome of loading the profile screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLoad {
    /// Profile fetched.
    Loaded(UserProfile),
    /// Backend returned no profile data; form stays empty.
    Empty,
    /// Token missing or rejected; the session was signed out.
    SessionEnded,
}

/// Outcome of saving the profile form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Changed fields sent and accepted.
    Saved(ProfileUpdate),
    /// Form matched the server values; nothing was sent.
    NoChanges,
}
