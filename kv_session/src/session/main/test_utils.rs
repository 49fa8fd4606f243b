//! Test utilities for session module tests

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::storage::{InMemorySessionStore, SessionRecord, SessionStore, StoreError};

/// Store wrapper that can be told to fail individual operations, for
/// exercising the unavailable-backend paths without a real backend.
///
/// Failure flags can be flipped mid-test, so one test can commit
/// successfully and then watch a later operation fail.
pub(crate) struct FailingSessionStore {
    inner: InMemorySessionStore,
    pub(crate) fail_get: AtomicBool,
    pub(crate) fail_set: AtomicBool,
    pub(crate) fail_delete: AtomicBool,
}

impl FailingSessionStore {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: InMemorySessionStore::new(),
            fail_get: AtomicBool::new(false),
            fail_set: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        })
    }

    fn check(&self, flag: &AtomicBool, op: &str) -> Result<(), StoreError> {
        if flag.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable(format!("injected {op} failure")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn init(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        self.check(&self.fail_get, "get")?;
        self.inner.get(session_id).await
    }

    async fn set(&self, session_id: &str, record: SessionRecord) -> Result<(), StoreError> {
        self.check(&self.fail_set, "set")?;
        self.inner.set(session_id, record).await
    }

    async fn delete(&self, session_id: &str) -> Result<(), StoreError> {
        self.check(&self.fail_delete, "delete")?;
        self.inner.delete(session_id).await
    }
}
