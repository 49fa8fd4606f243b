mod config;
mod errors;
mod main;
mod types;

pub use config::{SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE}; // Required for cookie configuration
pub use errors::SessionError;
pub use main::Session;
pub use types::CsrfToken;
