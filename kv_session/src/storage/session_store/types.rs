use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::storage::errors::StoreError;
use crate::storage::types::SessionRecord;

/// Keyed storage for session records.
///
/// This is the whole backend contract: three record operations plus a
/// connectivity probe. Methods take `&self` so one handle can be shared as an
/// `Arc<dyn SessionStore>` across request handlers; implementations provide
/// their own interior mutability. Concurrent writers to the same session id
/// resolve last-write-wins at record granularity, which is what the callers
/// are written to expect.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Verifies the backend is reachable. Called once at construction.
    async fn init(&self) -> Result<(), StoreError>;

    /// Looks up the record for a session id. Absence is `Ok(None)`, never an
    /// error; only backend trouble is.
    async fn get(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError>;

    /// Writes the whole record for a session id, replacing any previous one.
    async fn set(&self, session_id: &str, record: SessionRecord) -> Result<(), StoreError>;

    /// Removes the record for a session id. Deleting a missing key succeeds.
    async fn delete(&self, session_id: &str) -> Result<(), StoreError>;
}

/// Process-local backend for development and tests. No TTL, no eviction.
pub struct InMemorySessionStore {
    pub(super) entries: Mutex<HashMap<String, SessionRecord>>,
}

/// Redis-backed store. Records live under `session:{id}` as JSON, with an
/// optional relative expiry applied on every write.
pub struct RedisSessionStore {
    pub(super) client: redis::Client,
    pub(super) ttl: Option<u64>,
}
