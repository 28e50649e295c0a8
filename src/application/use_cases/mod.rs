//! Use case implementations.

mod load_profile_use_case;
mod login_use_case;
mod resolve_session_use_case;
mod update_profile_use_case;

pub use load_profile_use_case::LoadProfileUseCase;
pub use login_use_case::LoginUseCase;
pub use resolve_session_use_case::ResolveSessionUseCase;
pub use update_profile_use_case::UpdateProfileUseCase;
