//! kv-session-axum - Axum integration for the kv-session auth library
//!
//! Extractors, routers, and error mapping that expose kv-session's
//! cookie-bound sessions and CSRF protection as a JSON API.

mod admin;
mod auth;
mod config;
mod error;
mod router;
mod session;
mod state;

pub use config::{ADMIN_ROUTE_PREFIX, AUTH_ROUTE_PREFIX, CSRF_HEADER};
pub use router::{admin_router, app_router, app_router_no_trace, auth_router};
pub use session::{AuthRejection, AuthUser, RequestSession};
pub use state::AuthState;

// Re-export the cookie name so hosts can read it without depending on the
// core crate directly
pub use kv_session::SESSION_COOKIE_NAME;
