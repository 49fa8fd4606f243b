/// Admin gate tests
///
/// The admin flag lives on the session record, granted out of band by an
/// operator. These tests drive the grant through the server's own store
/// handle, the way a provisioning job would.
use crate::common::{MockBrowser, TestServer, extract_session_id};

/// Test the admin endpoint's three outcomes
/// 1. Anonymous callers get 401
/// 2. A signed-in non-admin gets 403
/// 3. After granting the flag on the session record, the same cookie passes
#[tokio::test]
async fn test_admin_stats_gate() {
    let server = TestServer::start().await.expect("server should start");

    // Anonymous
    let anonymous = MockBrowser::new(&server.base_url, false);
    let response = anonymous.get("/api/admin/stats").await.unwrap();
    assert_eq!(response.status(), 401);

    // Signed-in, no admin flag
    let browser = MockBrowser::new(&server.base_url, true);
    let response = browser
        .post_form(
            "/api/auth/signup",
            &[
                ("email", "e@f.com"),
                ("password", "pass123"),
                ("password_confirmation", "pass123"),
            ],
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let sid = extract_session_id(&response);

    let forbidden = browser.get("/api/admin/stats").await.unwrap();
    assert_eq!(forbidden.status(), 403);

    // Operator grants the flag on the stored record
    let mut record = server.state.sessions.get(&sid).await.unwrap().unwrap();
    record.data.is_admin = Some(true);
    server.state.sessions.set(&sid, record).await.unwrap();

    // The same cookie now passes the gate
    let allowed = browser.get("/api/admin/stats").await.unwrap();
    assert_eq!(allowed.status(), 200);
    let body: serde_json::Value = allowed.json().await.unwrap();
    assert_eq!(body["ok"], true);

    server.shutdown().await;
}

/// Revoking the flag takes effect on the next request
#[tokio::test]
async fn test_admin_flag_revocation() {
    let server = TestServer::start().await.expect("server should start");
    let browser = MockBrowser::new(&server.base_url, true);

    let response = browser
        .post_form(
            "/api/auth/signup",
            &[
                ("email", "g@h.com"),
                ("password", "pass123"),
                ("password_confirmation", "pass123"),
            ],
        )
        .await
        .unwrap();
    let sid = extract_session_id(&response);

    let mut record = server.state.sessions.get(&sid).await.unwrap().unwrap();
    record.data.is_admin = Some(true);
    server.state.sessions.set(&sid, record).await.unwrap();
    assert_eq!(browser.get("/api/admin/stats").await.unwrap().status(), 200);

    // Revoke
    let mut record = server.state.sessions.get(&sid).await.unwrap().unwrap();
    record.data.is_admin = Some(false);
    server.state.sessions.set(&sid, record).await.unwrap();
    assert_eq!(browser.get("/api/admin/stats").await.unwrap().status(), 403);

    server.shutdown().await;
}
