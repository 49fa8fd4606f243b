use reqwest::Response;

/// Extract the session id from a response's Set-Cookie header.
///
/// Panics with a helpful message when the header is absent or carries no
/// session cookie, since every caller treats that as a test failure.
pub fn extract_session_id(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("Set-Cookie header should be present")
        .to_str()
        .expect("Set-Cookie should be valid UTF-8");

    set_cookie
        .split("sid=")
        .nth(1)
        .and_then(|rest| rest.split(';').next())
        .expect("Should be able to extract the session id from the cookie")
        .to_string()
}
