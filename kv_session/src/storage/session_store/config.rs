use std::env;
use std::sync::{Arc, LazyLock};

use crate::storage::errors::StoreError;

use super::types::{InMemorySessionStore, RedisSessionStore, SessionStore};

const SESSION_TTL_DEFAULT: u64 = 60 * 60 * 24 * 7; // seven days

/// Relative record lifetime in seconds for TTL-capable backends, from
/// `SESSION_TTL`. `0` disables expiry. The in-memory store never expires
/// records regardless.
pub(super) static SESSION_TTL: LazyLock<Option<u64>> =
    LazyLock::new(|| ttl_from(env::var("SESSION_TTL").ok().as_deref()));

fn ttl_from(raw: Option<&str>) -> Option<u64> {
    match raw {
        None => Some(SESSION_TTL_DEFAULT),
        Some(v) => match v.parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(secs),
            Err(_) => Some(SESSION_TTL_DEFAULT),
        },
    }
}

/// Which session backend to construct, selected by `SESSION_STORE_TYPE`
/// (`memory` or `redis`; redis additionally needs `SESSION_STORE_URL`).
///
/// The kind is a plain value so callers can also build it directly and skip
/// the environment entirely, which is what tests do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStoreKind {
    Memory,
    Redis { url: String },
}

impl SessionStoreKind {
    pub fn from_env() -> Result<Self, StoreError> {
        let store_type =
            env::var("SESSION_STORE_TYPE").unwrap_or_else(|_| "memory".to_string());

        match store_type.as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => {
                let url = env::var("SESSION_STORE_URL").map_err(|_| {
                    StoreError::Unavailable(
                        "SESSION_STORE_URL must be set when SESSION_STORE_TYPE=redis".to_string(),
                    )
                })?;
                Ok(Self::Redis { url })
            }
            t => Err(StoreError::Unavailable(format!(
                "Unsupported session store type: {t}. Supported types are 'memory' and 'redis'"
            ))),
        }
    }

    /// Constructs the store and verifies connectivity before handing it out,
    /// so a misconfigured backend fails at startup rather than mid-request.
    pub async fn build(&self) -> Result<Arc<dyn SessionStore>, StoreError> {
        let store: Arc<dyn SessionStore> = match self {
            Self::Memory => Arc::new(InMemorySessionStore::new()),
            Self::Redis { url } => Arc::new(RedisSessionStore::connect(url, *SESSION_TTL)?),
        };
        store.init().await?;
        tracing::info!("Session store ready: {self:?}");
        Ok(store)
    }
}
