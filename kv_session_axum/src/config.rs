//! Central configuration for the kv-session-axum crate

use std::sync::LazyLock;

/// Mount point of the auth endpoints (signup, login, logout,
/// change-password, me).
/// Default: "/api/auth"
pub static AUTH_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/api/auth".to_string())
});

/// Mount point of the admin-gated endpoints.
/// Default: "/api/admin"
pub static ADMIN_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("ADMIN_ROUTE_PREFIX").unwrap_or_else(|_| "/api/admin".to_string())
});

/// Request header carrying the anti-forgery token for state-changing calls.
pub const CSRF_HEADER: &str = "X-CSRF-Token";
