use std::sync::Arc;

use sqlx::Sqlite;
use sqlx::pool::PoolOptions;
use tokio::task::JoinHandle;

use kv_session::{IdentityStore, InMemorySessionStore, SessionStore, SqliteDataStore};
use kv_session_axum::{AuthState, app_router};

/// Initialize tracing for tests
fn init_test_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Load test environment configuration
///
/// The `.env_test` file must be loaded before the first request touches the
/// cookie config statics; in particular it turns off the Secure attribute so
/// the test client will replay cookies over plain http.
fn load_test_environment() {
    init_test_tracing();

    if let Err(e) = dotenvy::from_filename(".env_test") {
        println!("Warning: Could not load .env_test file: {e}");
        println!("This may cause test failures due to missing configuration");
    }
}

/// Test server for integration testing
///
/// Serves the full auth router over a fresh in-memory session store and a
/// fresh in-memory sqlite identity store. Every test gets its own server on
/// an ephemeral port, so tests are isolated and run in parallel.
pub struct TestServer {
    /// Handle to the running server task
    server_handle: JoinHandle<()>,
    /// Base URL of the test server
    pub base_url: String,
    /// The state behind the server, for direct store access in tests
    pub state: AuthState,
}

impl TestServer {
    /// Start a new test server instance
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        load_test_environment();

        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let pool = PoolOptions::<Sqlite>::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let identities = IdentityStore::new(Arc::new(SqliteDataStore::new(pool)));
        identities.init().await?;
        let state = AuthState::new(sessions, identities);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{addr}");

        let app = app_router(state.clone());
        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            server_handle,
            base_url,
            state,
        })
    }

    /// Shutdown the test server and clean up resources
    pub async fn shutdown(self) {
        self.server_handle.abort();
    }
}
