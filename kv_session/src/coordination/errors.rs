//! Error types for the auth coordination layer

use thiserror::Error;

use crate::identity::IdentityError;
use crate::session::SessionError;
use crate::utils::UtilError;

/// Errors that can occur while coordinating sessions and identities
#[derive(Error, Debug)]
pub enum AuthError {
    /// Caller has no authenticated session user
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Authenticated but lacking the required privilege
    #[error("Insufficient privilege")]
    Forbidden,

    /// The request carried no anti-forgery token, or the wrong one
    #[error("CSRF token missing or invalid")]
    CsrfMissingOrInvalid,

    /// Registration collided with an existing email or username
    #[error("Identity already exists: {0}")]
    IdentityConflict(String),

    /// Unknown email or wrong password. Deliberately indistinct so callers
    /// cannot probe which accounts exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// New password and its confirmation differ
    #[error("Password confirmation does not match")]
    PasswordMismatch,

    /// General coordination error
    #[error("Coordination error: {0}")]
    Coordination(String),

    /// Error from session operations
    #[error("Session error: {0}")]
    Session(SessionError),

    /// Error from identity store operations
    #[error("Identity error: {0}")]
    Identity(IdentityError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(UtilError),
}

impl AuthError {
    /// Log the error and return self
    ///
    /// Client-input failures go to debug; store and crypto faults are real
    /// errors. Returning self allows chaining at the point the error is
    /// raised.
    pub fn log(self) -> Self {
        match &self {
            Self::NotAuthenticated => tracing::debug!("Not authenticated"),
            Self::Forbidden => tracing::debug!("Insufficient privilege"),
            Self::CsrfMissingOrInvalid => tracing::debug!("CSRF token missing or invalid"),
            Self::IdentityConflict(email) => tracing::debug!("Identity already exists: {email}"),
            Self::InvalidCredentials => tracing::debug!("Invalid credentials"),
            Self::PasswordMismatch => tracing::debug!("Password confirmation does not match"),
            Self::Coordination(msg) => tracing::error!("Coordination error: {msg}"),
            Self::Session(err) => tracing::error!("Session error: {err}"),
            Self::Identity(err) => tracing::error!("Identity error: {err}"),
            Self::Utils(err) => tracing::error!("Utils error: {err}"),
        }
        self
    }

    /// Whether this error means the session backend itself is unreachable,
    /// as opposed to a rejected request.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Session(err) if err.is_store_unavailable())
    }
}

// Custom From implementations that automatically log errors

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        let error = Self::Session(err);
        tracing::error!("{error}");
        error
    }
}

impl From<IdentityError> for AuthError {
    fn from(err: IdentityError) -> Self {
        match err {
            // A duplicate account is a client-level outcome, not a fault
            IdentityError::Conflict(email) => Self::IdentityConflict(email).log(),
            other => {
                let error = Self::Identity(other);
                tracing::error!("{error}");
                error
            }
        }
    }
}

impl From<UtilError> for AuthError {
    fn from(err: UtilError) -> Self {
        let error = Self::Utils(err);
        tracing::error!("{error}");
        error
    }
}
