use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use axum_extra::{TypedHeader, headers};
use http::{StatusCode, request::Parts};
use std::convert::Infallible;

use kv_session::{AuthError, CsrfToken, SESSION_COOKIE_NAME, Session, current_user};

use super::error::auth_error_status;
use super::state::AuthState;

/// Rejection carrying a coordination error mapped to its wire status.
#[derive(Debug)]
pub struct AuthRejection {
    status: StatusCode,
    message: String,
}

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        Self {
            status: auth_error_status(&err),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// The request's session, bound to the store but not yet loaded.
///
/// Binds the session cookie (when present) and the shared store handle into
/// a [`Session`] the handler drives itself: load, mutate, commit or clear,
/// then merge `take_cookie_headers()` into the response. Extraction never
/// rejects; a missing or unreadable cookie simply yields a session that will
/// mint a fresh id on load.
pub struct RequestSession(pub Session);

impl<S> FromRequestParts<S> for RequestSession
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        // A malformed Cookie header is treated the same as no cookie
        let cookies = parts
            .extract::<Option<TypedHeader<headers::Cookie>>>()
            .await
            .ok()
            .flatten();
        let request_sid = cookies
            .and_then(|cookies| cookies.get(SESSION_COOKIE_NAME.as_str()).map(str::to_string));

        Ok(Self(Session::new(auth_state.sessions, request_sid)))
    }
}

/// The signed-in user, available as an Axum extractor
///
/// Loads the request's session, resolves the account it points at, and
/// rejects anonymous callers with 401. This is a JSON API, so there is no
/// redirect on rejection.
///
/// # Example
///
/// ```no_run
/// use axum::{Router, routing::get};
/// use kv_session_axum::{AuthState, AuthUser};
///
/// async fn protected_handler(user: AuthUser) -> String {
///     format!("Hello, {}!", user.username)
/// }
///
/// let app: Router<AuthState> = Router::new()
///     .route("/protected", get(protected_handler));
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// Unique account identifier
    pub id: String,
    /// Login email
    pub email: String,
    /// Display name derived at registration
    pub username: String,
    /// Admin flag carried by the session record
    pub is_admin: bool,
    /// The session's current anti-forgery token, if one exists
    pub csrf_token: Option<String>,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        let RequestSession(mut session) = parts
            .extract_with_state::<RequestSession, _>(state)
            .await
            .map_err(|infallible| -> AuthRejection { match infallible {} })?;

        let (identity, csrf_token) = current_user(&mut session, &auth_state.identities)
            .await
            .map_err(AuthRejection::from)?;

        Ok(AuthUser {
            id: identity.id,
            email: identity.email,
            username: identity.username,
            is_admin: session.data().admin(),
            csrf_token: csrf_token.map(CsrfToken::into_inner),
        })
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, AuthRejection> =
            <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
