use axum::{Router, routing::get};

use dotenvy::dotenv;

use kv_session_axum::{
    ADMIN_ROUTE_PREFIX, AUTH_ROUTE_PREFIX, AuthState, AuthUser, admin_router, auth_router,
};

mod server;
use server::{init_tracing, spawn_http_server};

async fn index(user: Option<AuthUser>) -> String {
    match user {
        Some(user) => {
            let role = if user.is_admin { "admin" } else { "user" };
            format!("Signed in as {} <{}> ({role})\n", user.username, user.email)
        }
        None => format!(
            "Anonymous. POST email/password/password_confirmation to {}/signup to get started.\n",
            AUTH_ROUTE_PREFIX.as_str()
        ),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("demo_auth");

    dotenv().ok();
    let state = AuthState::from_env().await?;

    let app = Router::new()
        .route("/", get(index))
        .nest(AUTH_ROUTE_PREFIX.as_str(), auth_router())
        .nest(ADMIN_ROUTE_PREFIX.as_str(), admin_router())
        .with_state(state);

    let http_server = spawn_http_server(3001, app);

    http_server.await?;
    Ok(())
}
