use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account: the relational half of the auth system, next to the
/// KV-resident sessions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Identity {
    /// Unique identifier, minted at registration
    pub id: String,
    /// Login identifier, unique per deployment
    pub email: String,
    /// Display name; registration derives it from the email local part
    pub username: String,
    /// Argon2 hash of the password. Never serialized into responses.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Whether the account may receive admin session privileges
    pub is_admin: bool,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity with fresh timestamps and no admin privilege.
    pub fn new(id: String, email: String, username: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            username,
            password_hash,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }
}
