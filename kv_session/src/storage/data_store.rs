use sqlx::{Pool, Postgres, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use super::errors::StoreError;

/// Prefix prepended to every table this crate creates, so it can share a
/// database with the host application without name collisions.
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "auth_".to_string()));

/// Connection-pool capability for the relational side of the crate. Query
/// code dispatches on the concrete backend through the two accessors.
pub trait DataStore: Send + Sync {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>>;
    fn as_postgres(&self) -> Option<&Pool<Postgres>>;
}

#[derive(Clone, Debug)]
pub struct SqliteDataStore {
    pool: sqlx::SqlitePool,
}

#[derive(Clone, Debug)]
pub struct PostgresDataStore {
    pool: sqlx::PgPool,
}

impl SqliteDataStore {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

impl PostgresDataStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

impl DataStore for SqliteDataStore {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        Some(&self.pool)
    }

    fn as_postgres(&self) -> Option<&Pool<Postgres>> {
        None
    }
}

impl DataStore for PostgresDataStore {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        None
    }

    fn as_postgres(&self) -> Option<&Pool<Postgres>> {
        Some(&self.pool)
    }
}

/// Which relational backend to construct, selected by `DATA_STORE_TYPE`
/// (`sqlite` or `postgres`) and `DATA_STORE_URL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataStoreKind {
    Sqlite { url: String },
    Postgres { url: String },
}

impl DataStoreKind {
    pub fn from_env() -> Result<Self, StoreError> {
        let store_type =
            std::env::var("DATA_STORE_TYPE").unwrap_or_else(|_| "sqlite".to_string());
        let url = std::env::var("DATA_STORE_URL")
            .unwrap_or_else(|_| "sqlite:data/auth.db".to_string());

        match store_type.as_str() {
            "sqlite" => Ok(Self::Sqlite { url }),
            "postgres" => Ok(Self::Postgres { url }),
            t => Err(StoreError::Unavailable(format!(
                "Unsupported data store type: {t}. Supported types are 'sqlite' and 'postgres'"
            ))),
        }
    }

    pub fn build(&self) -> Result<Arc<dyn DataStore>, StoreError> {
        tracing::info!("Creating data store: {self:?}");
        match self {
            Self::Sqlite { url } => {
                let opts = sqlx::sqlite::SqliteConnectOptions::from_str(url)
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?
                    .create_if_missing(true);

                // An in-memory sqlite database exists per connection, so a
                // multi-connection pool would hand out disjoint databases.
                let pool = if url.contains(":memory:") || url.contains("mode=memory") {
                    sqlx::pool::PoolOptions::<Sqlite>::new()
                        .max_connections(1)
                        .connect_lazy_with(opts)
                } else {
                    sqlx::sqlite::SqlitePool::connect_lazy_with(opts)
                };
                Ok(Arc::new(SqliteDataStore::new(pool)))
            }
            Self::Postgres { url } => {
                let pool = sqlx::PgPool::connect_lazy(url)
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                Ok(Arc::new(PostgresDataStore::new(pool)))
            }
        }
    }
}
