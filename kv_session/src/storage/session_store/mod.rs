mod config;
mod memory;
mod redis;
mod types;

pub use config::SessionStoreKind;
pub use types::{InMemorySessionStore, RedisSessionStore, SessionStore};
