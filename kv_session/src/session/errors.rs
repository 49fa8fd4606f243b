use thiserror::Error;

use crate::storage::StoreError;
use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Backend trouble, passed through so callers can map it to 503.
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    #[error("Cookie error: {0}")]
    Cookie(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl SessionError {
    /// True when the underlying cause is an unreachable backend, the one
    /// failure callers are told to treat as "assume nothing happened".
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Store(StoreError::Unavailable(_)))
    }
}
