use std::env;
use std::sync::LazyLock;

/// Name of the opaque session cookie. Browsers never see anything else about
/// the session, so renaming it is purely a deployment concern.
pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("sid".to_string())
});

/// Whether staged cookies carry the `Secure` attribute. Defaults to on;
/// plain-http development setups opt out explicitly.
pub static SESSION_COOKIE_SECURE: LazyLock<bool> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_SECURE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(true)
});
