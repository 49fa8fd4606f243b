/// Browser-facing auth flow tests
///
/// Each test runs against its own server instance with fresh in-memory
/// stores, exercising the full HTTP surface: form posts, the session cookie,
/// and the X-CSRF-Token header.
use serde_json::Value;

use crate::common::{MockBrowser, TestServer, extract_session_id};

async fn signup(browser: &MockBrowser, email: &str, password: &str) -> reqwest::Response {
    browser
        .post_form(
            "/api/auth/signup",
            &[
                ("email", email),
                ("password", password),
                ("password_confirmation", password),
            ],
        )
        .await
        .expect("signup request should reach the server")
}

/// Test signup establishing a session
/// 1. Signup returns 201 with a csrf token in the body
/// 2. The session cookie carries the expected attributes
/// 3. The same browser is recognized by /me afterwards
#[tokio::test]
async fn test_signup_establishes_session() {
    let server = TestServer::start().await.expect("server should start");
    let browser = MockBrowser::new(&server.base_url, true);

    // When signing up
    let response = signup(&browser, "a@b.com", "pass123").await;
    assert_eq!(response.status(), 201);

    // Then the session cookie has the contract attributes
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("signup should set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("sid="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    // A session cookie, not a persistent one
    assert!(!set_cookie.contains("Max-Age"));

    let sid = extract_session_id(&response);
    assert_eq!(sid.len(), 43);

    // And the body carries identity plus token
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "a@b.com");
    assert_eq!(body["csrf"].as_str().unwrap().len(), 43);

    // And /me recognizes the browser
    let me = browser.get("/api/auth/me").await.unwrap();
    assert_eq!(me.status(), 200);
    let me_body: Value = me.json().await.unwrap();
    assert_eq!(me_body["email"], "a@b.com");
    assert_eq!(me_body["csrf"], body["csrf"]);

    server.shutdown().await;
}

#[tokio::test]
async fn test_me_without_cookie_is_unauthorized() {
    let server = TestServer::start().await.expect("server should start");

    // A cookie-less client is anonymous even after someone signed up
    let browser = MockBrowser::new(&server.base_url, true);
    signup(&browser, "a@b.com", "pass123").await;

    let api_client = MockBrowser::new(&server.base_url, false);
    let response = api_client.get("/api/auth/me").await.unwrap();
    assert_eq!(response.status(), 401);

    server.shutdown().await;
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let server = TestServer::start().await.expect("server should start");
    let browser = MockBrowser::new(&server.base_url, true);

    assert_eq!(signup(&browser, "a@b.com", "pass123").await.status(), 201);

    let other = MockBrowser::new(&server.base_url, true);
    let response = signup(&other, "a@b.com", "different").await;
    assert_eq!(response.status(), 409);

    server.shutdown().await;
}

#[tokio::test]
async fn test_signup_password_mismatch_is_rejected() {
    let server = TestServer::start().await.expect("server should start");
    let browser = MockBrowser::new(&server.base_url, true);

    let response = browser
        .post_form(
            "/api/auth/signup",
            &[
                ("email", "a@b.com"),
                ("password", "pass123"),
                ("password_confirmation", "pass124"),
            ],
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // Nothing was created, so the same email can sign up afterwards
    assert_eq!(signup(&browser, "a@b.com", "pass123").await.status(), 201);

    server.shutdown().await;
}

/// Test login rotating the anti-forgery token
/// 1. Login returns a token different from the signup one
/// 2. The pre-login token is dead
/// 3. The fresh token authorizes a state-changing call
#[tokio::test]
async fn test_login_rotates_csrf_token() {
    let server = TestServer::start().await.expect("server should start");
    let browser = MockBrowser::new(&server.base_url, true);

    // Given a signed-up browser holding the signup-era token
    let response = signup(&browser, "c@d.com", "pass123").await;
    let old_token = response.json::<Value>().await.unwrap()["csrf"]
        .as_str()
        .unwrap()
        .to_string();

    // When logging in again from the same browser
    let login = browser
        .post_form(
            "/api/auth/login",
            &[("email", "c@d.com"), ("password", "pass123")],
        )
        .await
        .unwrap();
    assert_eq!(login.status(), 200);
    let new_token = login.json::<Value>().await.unwrap()["csrf"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(new_token, old_token);

    // Then the old token no longer authorizes anything
    let stale = browser
        .post_form_with_headers(
            "/api/auth/change-password",
            &[("old_password", "pass123"), ("new_password", "next456")],
            &[("X-CSRF-Token", &old_token)],
        )
        .await
        .unwrap();
    assert_eq!(stale.status(), 400);
    assert!(stale.text().await.unwrap().to_lowercase().contains("csrf"));

    // While the fresh one does
    let current = browser
        .post_form_with_headers(
            "/api/auth/change-password",
            &[("old_password", "pass123"), ("new_password", "next456")],
            &[("X-CSRF-Token", &new_token)],
        )
        .await
        .unwrap();
    assert_eq!(current.status(), 200);

    server.shutdown().await;
}

/// Test the change-password contract end to end
/// 1. Missing and wrong tokens are rejected with a CSRF-labeled 400
/// 2. The right token changes the password
/// 3. Only the new password logs in afterwards
#[tokio::test]
async fn test_change_password_flow() {
    let server = TestServer::start().await.expect("server should start");
    let browser = MockBrowser::new(&server.base_url, true);

    let response = signup(&browser, "x@y.com", "pass123").await;
    let csrf = response.json::<Value>().await.unwrap()["csrf"]
        .as_str()
        .unwrap()
        .to_string();

    // Missing header
    let missing = browser
        .post_form(
            "/api/auth/change-password",
            &[("old_password", "pass123"), ("new_password", "pass456")],
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), 400);
    assert!(missing.text().await.unwrap().to_lowercase().contains("csrf"));

    // Wrong header
    let forged = browser
        .post_form_with_headers(
            "/api/auth/change-password",
            &[("old_password", "pass123"), ("new_password", "pass456")],
            &[("X-CSRF-Token", "forged-token")],
        )
        .await
        .unwrap();
    assert_eq!(forged.status(), 400);

    // Wrong old password with the right token
    let wrong_old = browser
        .post_form_with_headers(
            "/api/auth/change-password",
            &[("old_password", "nope"), ("new_password", "pass456")],
            &[("X-CSRF-Token", &csrf)],
        )
        .await
        .unwrap();
    assert_eq!(wrong_old.status(), 400);

    // The real change
    let changed = browser
        .post_form_with_headers(
            "/api/auth/change-password",
            &[("old_password", "pass123"), ("new_password", "pass456")],
            &[("X-CSRF-Token", &csrf)],
        )
        .await
        .unwrap();
    assert_eq!(changed.status(), 200);
    assert_eq!(changed.json::<Value>().await.unwrap()["ok"], true);

    // Only the new password works from a fresh browser
    let fresh = MockBrowser::new(&server.base_url, true);
    let old_login = fresh
        .post_form(
            "/api/auth/login",
            &[("email", "x@y.com"), ("password", "pass123")],
        )
        .await
        .unwrap();
    assert_eq!(old_login.status(), 400);

    let new_login = fresh
        .post_form(
            "/api/auth/login",
            &[("email", "x@y.com"), ("password", "pass456")],
        )
        .await
        .unwrap();
    assert_eq!(new_login.status(), 200);

    server.shutdown().await;
}

/// A token from another browser's session never authorizes this one
#[tokio::test]
async fn test_foreign_session_token_is_rejected() {
    let server = TestServer::start().await.expect("server should start");

    let alice = MockBrowser::new(&server.base_url, true);
    signup(&alice, "alice@example.com", "pass123").await;

    let mallory = MockBrowser::new(&server.base_url, true);
    let response = signup(&mallory, "mallory@example.com", "pass123").await;
    let mallory_token = response.json::<Value>().await.unwrap()["csrf"]
        .as_str()
        .unwrap()
        .to_string();

    // Mallory's token presented with Alice's cookie
    let cross = alice
        .post_form_with_headers(
            "/api/auth/change-password",
            &[("old_password", "pass123"), ("new_password", "owned1")],
            &[("X-CSRF-Token", &mallory_token)],
        )
        .await
        .unwrap();
    assert_eq!(cross.status(), 400);

    server.shutdown().await;
}

/// Test logout destroying the session
/// 1. Logout answers ok and expires the cookie
/// 2. The server-side record is gone
/// 3. The browser is anonymous afterwards
#[tokio::test]
async fn test_logout_destroys_session() {
    let server = TestServer::start().await.expect("server should start");
    let browser = MockBrowser::new(&server.base_url, true);

    let response = signup(&browser, "c@d.com", "pass123").await;
    let sid = extract_session_id(&response);

    // When logging out
    let logout = browser.post_form("/api/auth/logout", &[]).await.unwrap();
    assert_eq!(logout.status(), 200);
    let expiry = logout
        .headers()
        .get("set-cookie")
        .expect("logout should expire the cookie")
        .to_str()
        .unwrap();
    assert!(expiry.contains("Max-Age=0"));

    // Then the record is gone from the store
    assert!(server.state.sessions.get(&sid).await.unwrap().is_none());

    // And the browser is anonymous
    let me = browser.get("/api/auth/me").await.unwrap();
    assert_eq!(me.status(), 401);

    server.shutdown().await;
}

/// Logout without ever having had a session is still a clean 200
#[tokio::test]
async fn test_logout_without_session_is_ok() {
    let server = TestServer::start().await.expect("server should start");
    let browser = MockBrowser::new(&server.base_url, true);

    let logout = browser.post_form("/api/auth/logout", &[]).await.unwrap();
    assert_eq!(logout.status(), 200);

    server.shutdown().await;
}
