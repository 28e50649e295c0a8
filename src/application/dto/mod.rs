//! Data transfer objects for the application layer.

mod auth_dto;
mod notice;
mod profile_dto;

pub use auth_dto::{LoginRequest, LoginResponse, TokenSource};
pub use notice::{Dialog, Notice, NoticeLevel};
pub use profile_dto::{ProfileForm, ProfileLoad, SaveOutcome};
