use serde::Serialize;

/// Type-safe wrapper for anti-forgery tokens.
///
/// Prevents mixing up CSRF tokens with session ids or other opaque strings.
/// Serializes as the bare string, so it can be put straight into a JSON
/// response body for the client to echo back in a header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
