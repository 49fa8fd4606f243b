use http::HeaderMap;
use http::header::SET_COOKIE;

use crate::session::config::SESSION_COOKIE_SECURE;
use crate::session::errors::SessionError;

/// Appends a Set-Cookie header binding the browser to a session id.
///
/// Attributes are fixed by contract: HttpOnly (scripts never see the id),
/// SameSite=Lax, Path=/. No Max-Age, so the cookie lives for the browser
/// session; server-side TTL is what actually bounds the session. `Secure` is
/// appended unless the deployment opted out for plain-http development.
pub(crate) fn stage_session_cookie(
    headers: &mut HeaderMap,
    name: &str,
    session_id: &str,
) -> Result<(), SessionError> {
    let mut cookie = format!("{name}={session_id}; SameSite=Lax; HttpOnly; Path=/");
    if *SESSION_COOKIE_SECURE {
        cookie.push_str("; Secure");
    }
    tracing::debug!("Staging session cookie: {cookie}");
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(())
}

/// Appends a Set-Cookie header that tells the browser to drop the session
/// cookie immediately (empty value, Max-Age=0).
pub(crate) fn stage_expired_cookie(
    headers: &mut HeaderMap,
    name: &str,
) -> Result<(), SessionError> {
    let mut cookie = format!("{name}=; SameSite=Lax; HttpOnly; Path=/; Max-Age=0");
    if *SESSION_COOKIE_SECURE {
        cookie.push_str("; Secure");
    }
    tracing::debug!("Staging expired session cookie: {cookie}");
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(())
}
