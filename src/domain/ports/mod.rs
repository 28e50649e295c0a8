mod auth_port;
mod profile_port;
mod token_storage_port;

pub use auth_port::AuthPort;
pub use profile_port::{ProfilePort, ProfileUpdate};
pub use token_storage_port::{TOKEN_KEY, TokenStoragePort};
