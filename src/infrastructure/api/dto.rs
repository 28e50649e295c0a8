use serde::{Deserialize, Serialize};

use crate::domain::entities::UserProfile;

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
#[allow(missing_docs)]
pub struct LoginBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /login`.
#[derive(Debug, Deserialize)]
#[allow(missing_docs)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Profile fields as the backend names them.
#[allow(missing_docs)]
#[derive(Debug, Default, Deserialize)]
pub struct ProfileFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response of `GET /api/user/profile`, either `{ "user": {..} }` or flat.
#[derive(Debug, Deserialize)]
#[allow(missing_docs)]
pub struct ProfileResponse {
    /// Nested shape.
    #[serde(default)]
    pub user: Option<ProfileFields>,
    #[serde(flatten)]
    pub fields: ProfileFields,
}

impl ProfileResponse {
    /// Prefers the nested shape and falls back from `name` to `username`.
    pub fn into_profile(self) -> UserProfile {
        let fields = self.user.unwrap_or(self.fields);
        let name = fields
            .name
            .filter(|name| !name.is_empty())
            .or(fields.username)
            .unwrap_or_default();
        UserProfile::new(name, fields.email.unwrap_or_default())
    }
}

/// Error body; the backend puts a human-readable reason in `message`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Reason for the failure, if given.
    #[serde(default)]
    pub message: Option<String>,
}
