use std::sync::Arc;

use crate::identity::{errors::IdentityError, types::Identity};
use crate::storage::DataStore;

use super::postgres::*;
use super::sqlite::*;

/// Relational store for identities, dispatching on whichever backend the
/// injected pool handle wraps. Clones share the underlying pool.
#[derive(Clone)]
pub struct IdentityStore {
    data: Arc<dyn DataStore>,
}

impl IdentityStore {
    pub fn new(data: Arc<dyn DataStore>) -> Self {
        Self { data }
    }

    /// Create the identities table if needed and, on Postgres, check that an
    /// existing table still matches the expected schema.
    pub async fn init(&self) -> Result<(), IdentityError> {
        match (self.data.as_sqlite(), self.data.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                Ok(())
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_identity_tables_postgres(pool).await?;
                Ok(())
            }
            _ => Err(IdentityError::Storage(
                "Unsupported database type".to_string(),
            )),
        }
    }

    /// Get an identity by its ID
    pub async fn get_identity(&self, id: &str) -> Result<Option<Identity>, IdentityError> {
        if let Some(pool) = self.data.as_sqlite() {
            get_identity_sqlite(pool, id).await
        } else if let Some(pool) = self.data.as_postgres() {
            get_identity_postgres(pool, id).await
        } else {
            Err(IdentityError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Get an identity by its login email
    pub async fn get_identity_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Identity>, IdentityError> {
        if let Some(pool) = self.data.as_sqlite() {
            get_identity_by_email_sqlite(pool, email).await
        } else if let Some(pool) = self.data.as_postgres() {
            get_identity_by_email_postgres(pool, email).await
        } else {
            Err(IdentityError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Insert a new identity. A duplicate email or username surfaces as
    /// `IdentityError::Conflict`.
    pub async fn create_identity(&self, identity: Identity) -> Result<Identity, IdentityError> {
        if let Some(pool) = self.data.as_sqlite() {
            create_identity_sqlite(pool, identity).await
        } else if let Some(pool) = self.data.as_postgres() {
            create_identity_postgres(pool, identity).await
        } else {
            Err(IdentityError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Replace the stored password hash and bump `updated_at`. Unknown ids
    /// report `IdentityError::NotFound`.
    pub async fn update_password(
        &self,
        id: &str,
        password_hash: &str,
    ) -> Result<(), IdentityError> {
        if let Some(pool) = self.data.as_sqlite() {
            update_password_sqlite(pool, id, password_hash).await
        } else if let Some(pool) = self.data.as_postgres() {
            update_password_postgres(pool, id, password_hash).await
        } else {
            Err(IdentityError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }
}
