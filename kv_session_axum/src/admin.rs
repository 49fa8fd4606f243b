use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde_json::{Value, json};

use super::error::IntoResponseError;
use super::session::RequestSession;
use super::state::AuthState;

pub(super) fn router() -> Router<AuthState> {
    Router::new().route("/stats", get(stats))
}

/// Admin-gated probe endpoint. The gate runs in the handler rather than the
/// extractor so the 403-vs-401 distinction survives intact.
async fn stats(
    State(state): State<AuthState>,
    RequestSession(mut session): RequestSession,
) -> Result<Json<Value>, (StatusCode, String)> {
    kv_session::require_admin(&mut session, &state.identities)
        .await
        .into_response_error()?;

    Ok(Json(json!({ "ok": true })))
}
