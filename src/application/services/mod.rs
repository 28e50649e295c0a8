//! Application services shared across use cases.

mod session_manager;

pub use session_manager::{SessionManager, SessionState};
