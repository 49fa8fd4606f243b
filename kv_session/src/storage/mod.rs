mod data_store;
mod errors;
mod schema_validation;
mod session_store;
mod types;

pub use data_store::{DataStore, DataStoreKind, PostgresDataStore, SqliteDataStore};
pub use errors::StoreError;
pub use session_store::{InMemorySessionStore, RedisSessionStore, SessionStore, SessionStoreKind};
pub use types::{SessionData, SessionRecord};

pub(crate) use data_store::DB_TABLE_PREFIX;
pub(crate) use schema_validation::validate_postgres_table_schema;
