//! Auth coordination module
//!
//! High-level flows that tie sessions to identities: registration, login,
//! logout, password change, and resolution of the signed-in user. Each flow
//! operates on a caller-provided `Session` plus an `IdentityStore` handle, so
//! a transport layer binds them per request and tests inject their own.
//!
//! The module is divided into several submodules:
//! - `admin`: Admin-gated resolution of the signed-in user
//! - `auth`: Registration, login, logout, and password flows
//! - `errors`: Error types specific to coordination operations

mod admin;
mod auth;
mod errors;

pub use admin::require_admin;
pub use auth::{change_password, current_user, login_user, logout_user, register_user};
pub use errors::AuthError;
