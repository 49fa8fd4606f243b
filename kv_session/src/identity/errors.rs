use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum IdentityError {
    #[error("Identity not found")]
    NotFound,

    /// Unique-constraint violation on email or username. Carries the email
    /// for logging; the public message stays generic.
    #[error("Identity already exists: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Maps database failures, keeping unique-constraint violations
/// distinguishable so registration can report a duplicate account instead of
/// a server fault.
pub(super) fn map_sqlx_error(context: &str, err: sqlx::Error) -> IdentityError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return IdentityError::Conflict(context.to_string());
        }
    }
    IdentityError::Storage(err.to_string())
}
