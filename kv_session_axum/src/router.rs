//! Combined router for the session auth endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::config::{ADMIN_ROUTE_PREFIX, AUTH_ROUTE_PREFIX};
use super::state::AuthState;

/// Router for the account endpoints, to be nested under
/// `AUTH_ROUTE_PREFIX` (or a mount point of the host's choosing):
/// signup, login, logout, change-password, me.
pub fn auth_router() -> Router<AuthState> {
    super::auth::router()
}

/// Router for the admin-gated endpoints.
pub fn admin_router() -> Router<AuthState> {
    super::admin::router()
}

/// Create a combined router for all auth endpoints
///
/// Mounts the account routes at `{AUTH_ROUTE_PREFIX}` and the admin routes
/// at `{ADMIN_ROUTE_PREFIX}`, binds the given state, and wraps the result in
/// HTTP tracing. The returned router merges into any host application.
pub fn app_router(state: AuthState) -> Router {
    app_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `app_router()` but without the HTTP tracing middleware, for hosts
/// that bring their own.
pub fn app_router_no_trace(state: AuthState) -> Router {
    Router::new()
        .nest(AUTH_ROUTE_PREFIX.as_str(), auth_router())
        .nest(ADMIN_ROUTE_PREFIX.as_str(), admin_router())
        .with_state(state)
}
