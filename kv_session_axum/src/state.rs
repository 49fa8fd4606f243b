use std::sync::Arc;

use kv_session::{DataStoreKind, IdentityStore, SessionStore, SessionStoreKind};

/// Shared handles the extractors and handlers work against: the session KV
/// store and the relational identity store. Cloning shares both.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionStore>,
    pub identities: IdentityStore,
}

impl AuthState {
    pub fn new(sessions: Arc<dyn SessionStore>, identities: IdentityStore) -> Self {
        Self {
            sessions,
            identities,
        }
    }

    /// Builds both stores from environment configuration and runs their
    /// initialization (connectivity check, table creation).
    pub async fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let sessions = SessionStoreKind::from_env()?.build().await?;
        let identities = IdentityStore::new(DataStoreKind::from_env()?.build()?);
        identities.init().await?;
        Ok(Self {
            sessions,
            identities,
        })
    }
}
