//! Learning backend REST adapter.

mod client;
mod dto;

pub use client::{ApiClient, RequestKind, error_for_status};
