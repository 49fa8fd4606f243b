use thiserror::Error;

/// Failures surfaced by the pluggable stores.
///
/// `Unavailable` is the deliberate catch-all for backend trouble: callers are
/// not expected to distinguish a refused connection from a timeout, only to
/// know that nothing can be assumed about the stored state.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        Self::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
