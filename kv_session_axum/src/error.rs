use http::StatusCode;
use kv_session::AuthError;

/// Maps a coordination error to the wire status.
///
/// Store trouble is the one server-side case with a dedicated status so
/// callers can tell an outage from a rejected request.
pub(super) fn auth_error_status(err: &AuthError) -> StatusCode {
    if err.is_store_unavailable() {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    match err {
        AuthError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        AuthError::Forbidden => StatusCode::FORBIDDEN,
        AuthError::CsrfMissingOrInvalid => StatusCode::BAD_REQUEST,
        AuthError::IdentityConflict(_) => StatusCode::CONFLICT,
        AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
        AuthError::PasswordMismatch => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

impl<T> IntoResponseError<T> for Result<T, AuthError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (auth_error_status(&e), e.to_string()))
    }
}
