use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::storage::errors::StoreError;
use crate::storage::types::SessionRecord;

use super::types::{InMemorySessionStore, SessionStore};

impl InMemorySessionStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session store");
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn init(&self) -> Result<(), StoreError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn get(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.entries.lock().await.get(session_id).cloned())
    }

    async fn set(&self, session_id: &str, record: SessionRecord) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(session_id.to_string(), record);
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<(), StoreError> {
        self.entries.lock().await.remove(session_id);
        Ok(())
    }
}
