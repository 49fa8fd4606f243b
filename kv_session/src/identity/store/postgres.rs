use sqlx::{Pool, Postgres};

use crate::identity::config::DB_TABLE_IDENTITIES;
use crate::identity::errors::{IdentityError, map_sqlx_error};
use crate::identity::types::Identity;
use crate::storage::validate_postgres_table_schema;

// PostgreSQL implementations
pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))?;

    Ok(())
}

/// Validates that the identities table matches the expected schema
pub(super) async fn validate_identity_tables_postgres(
    pool: &Pool<Postgres>,
) -> Result<(), IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    let expected_columns = vec![
        ("id", "text"),
        ("email", "text"),
        ("username", "text"),
        ("password_hash", "text"),
        ("is_admin", "boolean"),
        ("created_at", "timestamp with time zone"),
        ("updated_at", "timestamp with time zone"),
    ];

    validate_postgres_table_schema(pool, table_name, &expected_columns, IdentityError::Storage)
        .await
}

pub(super) async fn get_identity_postgres(
    pool: &Pool<Postgres>,
    id: &str,
) -> Result<Option<Identity>, IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    sqlx::query_as::<_, Identity>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))
}

pub(super) async fn get_identity_by_email_postgres(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<Identity>, IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    sqlx::query_as::<_, Identity>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE email = $1
        "#
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| IdentityError::Storage(e.to_string()))
}

pub(super) async fn create_identity_postgres(
    pool: &Pool<Postgres>,
    identity: Identity,
) -> Result<Identity, IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name}
            (id, email, username, password_hash, is_admin, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
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

pub(super) async fn update_password_postgres(
    pool: &Pool<Postgres>,
    id: &str,
    password_hash: &str,
) -> Result<(), IdentityError> {
    let table_name = DB_TABLE_IDENTITIES.as_str();

    let result = sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET password_hash = $1, updated_at = $2 WHERE id = $3
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
