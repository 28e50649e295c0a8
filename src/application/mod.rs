//! Application layer with use cases, DTOs and the session service.

/// Data transfer objects.
pub mod dto;
/// Shared application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, LoginResponse, Notice, TokenSource};
pub use services::{SessionManager, SessionState};
pub use use_cases::{LoadProfileUseCase, LoginUseCase, ResolveSessionUseCase, UpdateProfileUseCase};
