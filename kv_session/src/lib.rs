//! kv-session - Server-side sessions with CSRF protection over pluggable KV storage
//!
//! This crate keeps all session state on the server, keyed by an opaque
//! cookie, and pairs each session with a rotating anti-forgery token.
//! Identities live in a relational store next to the KV-resident sessions;
//! coordination flows tie the two together for registration, login, logout,
//! and password changes. Every store is handed in as an injected handle, so
//! hosts and tests choose their own backends.

mod coordination;
mod identity;
mod session;
mod storage;
mod utils;

// Re-export the coordination flows and their error type
pub use coordination::{
    AuthError, change_password, current_user, login_user, logout_user, register_user,
    require_admin,
};

pub use identity::{Identity, IdentityError, IdentityStore, hash_password, verify_password};

pub use session::{CsrfToken, SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE, Session, SessionError};

pub use storage::{
    DataStore, DataStoreKind, InMemorySessionStore, PostgresDataStore, RedisSessionStore,
    SessionData, SessionRecord, SessionStore, SessionStoreKind, SqliteDataStore, StoreError,
};
