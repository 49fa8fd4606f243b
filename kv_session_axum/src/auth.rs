use axum::{
    Json, Router,
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::config::CSRF_HEADER;
use super::error::IntoResponseError;
use super::session::RequestSession;
use super::state::AuthState;

pub(super) fn router() -> Router<AuthState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/change-password", post(change_password))
        .route("/me", get(me))
}

#[derive(Deserialize)]
pub(super) struct SignupForm {
    email: String,
    password: String,
    password_confirmation: String,
}

#[derive(Deserialize)]
pub(super) struct LoginForm {
    email: String,
    password: String,
}

#[derive(Deserialize)]
pub(super) struct ChangePasswordForm {
    old_password: String,
    new_password: String,
}

/// Identity payload returned by signup and me; `csrf` is null only when the
/// session has never rotated a token.
#[derive(Serialize)]
pub(super) struct UserResponse {
    id: String,
    email: String,
    csrf: Option<String>,
}

#[derive(Serialize)]
pub(super) struct CsrfResponse {
    csrf: String,
}

#[derive(Serialize)]
pub(super) struct OkResponse {
    ok: bool,
}

async fn signup(
    State(state): State<AuthState>,
    RequestSession(mut session): RequestSession,
    Form(form): Form<SignupForm>,
) -> Result<(StatusCode, HeaderMap, Json<UserResponse>), (StatusCode, String)> {
    let (identity, csrf_token) = kv_session::register_user(
        &mut session,
        &state.identities,
        &form.email,
        &form.password,
        &form.password_confirmation,
    )
    .await
    .into_response_error()?;

    Ok((
        StatusCode::CREATED,
        session.take_cookie_headers(),
        Json(UserResponse {
            id: identity.id,
            email: identity.email,
            csrf: Some(csrf_token.into_inner()),
        }),
    ))
}

async fn login(
    State(state): State<AuthState>,
    RequestSession(mut session): RequestSession,
    Form(form): Form<LoginForm>,
) -> Result<(HeaderMap, Json<CsrfResponse>), (StatusCode, String)> {
    let csrf_token =
        kv_session::login_user(&mut session, &state.identities, &form.email, &form.password)
            .await
            .into_response_error()?;

    Ok((
        session.take_cookie_headers(),
        Json(CsrfResponse {
            csrf: csrf_token.into_inner(),
        }),
    ))
}

async fn logout(
    RequestSession(mut session): RequestSession,
) -> Result<(HeaderMap, Json<OkResponse>), (StatusCode, String)> {
    kv_session::logout_user(&mut session)
        .await
        .into_response_error()?;

    // The staged headers carry the cookie expiry
    Ok((session.take_cookie_headers(), Json(OkResponse { ok: true })))
}

async fn change_password(
    State(state): State<AuthState>,
    RequestSession(mut session): RequestSession,
    headers: HeaderMap,
    Form(form): Form<ChangePasswordForm>,
) -> Result<(HeaderMap, Json<OkResponse>), (StatusCode, String)> {
    let csrf_candidate = headers.get(CSRF_HEADER).and_then(|value| value.to_str().ok());

    kv_session::change_password(
        &mut session,
        &state.identities,
        &form.old_password,
        &form.new_password,
        csrf_candidate,
    )
    .await
    .into_response_error()?;

    Ok((session.take_cookie_headers(), Json(OkResponse { ok: true })))
}

async fn me(
    State(state): State<AuthState>,
    RequestSession(mut session): RequestSession,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let (identity, csrf_token) = kv_session::current_user(&mut session, &state.identities)
        .await
        .into_response_error()?;

    Ok(Json(UserResponse {
        id: identity.id,
        email: identity.email,
        csrf: csrf_token.map(|token| token.into_inner()),
    }))
}
