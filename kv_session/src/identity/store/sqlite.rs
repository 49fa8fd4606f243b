use sqlx::{Pool, Sqlite};

use crate::identity::config::DB_TABLE_IDENTITIES;
use crate::identity::errors::{IdentityError, map_sqlx_error};
use crate::identity::types::Identity;

// SQLite implementations
pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_identity_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
) -> Result<Option<Identity>, IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    sqlx::query_as::<_, Identity>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))
}

pub(super) async fn get_identity_by_email_sqlite(
    pool: &Pool<Sqlite>,
    email: &str,
) -> Result<Option<Identity>, IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    sqlx::query_as::<_, Identity>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE email = ?
        "#
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))
}

pub(super) async fn create_identity_sqlite(
    pool: &Pool<Sqlite>,
    identity: Identity,
) -> Result<Identity, IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name}
            (id, email, username, password_hash, is_admin, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#
    ))
    .bind(&identity.id)
    .bind(&identity.email)
    .bind(&identity.username)
    .bind(&identity.password_hash)
    .bind(identity.is_admin)
    .bind(identity.created_at)
    .bind(identity.updated_at)
    .execute(pool)
    .await
    .map_err(|e| map_sqlx_error(&identity.email, e))?;

    Ok(identity)
}

pub(super) async fn update_password_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
    password_hash: &str,
) -> Result<(), IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    let result = sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET password_hash = ?, updated_at = ? WHERE id = ?
        "#
    ))
    .bind(password_hash)
    .bind(chrono::Utc::now())
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(IdentityError::NotFound);
    }

    Ok(())
}
