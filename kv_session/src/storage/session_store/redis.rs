use async_trait::async_trait;
use redis::{self, AsyncCommands};

use crate::storage::errors::StoreError;
use crate::storage::types::SessionRecord;

use super::types::{RedisSessionStore, SessionStore};

const KEY_PREFIX: &str = "session";

impl RedisSessionStore {
    pub(super) fn connect(url: &str, ttl: Option<u64>) -> Result<Self, StoreError> {
        tracing::info!("Creating redis session store for {url}");
        let client = redis::Client::open(url)?;
        Ok(Self { client, ttl })
    }

    fn make_key(session_id: &str) -> String {
        format!("{KEY_PREFIX}:{session_id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn init(&self) -> Result<(), StoreError> {
        // Verify the connection works
        let _conn = self.client.get_multiplexed_async_connection().await?;
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(session_id);
        let value: Option<String> = conn.get(&key).await?;

        match value {
            Some(v) => Ok(Some(serde_json::from_str(&v)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, session_id: &str, record: SessionRecord) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(session_id);
        let value = serde_json::to_string(&record)?;
        match self.ttl {
            // Relative expiry restarts on every write, so an active session
            // keeps sliding its deadline forward.
            Some(ttl) => {
                let _: () = conn.set_ex(&key, value, ttl).await?;
            }
            None => {
                let _: () = conn.set(&key, value).await?;
            }
        }
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(session_id);
        let _: () = conn.del(&key).await?;
        Ok(())
    }
}
