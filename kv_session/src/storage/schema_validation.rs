use sqlx::{Pool, Postgres};

/// Checks a live Postgres table against the column layout this crate creates.
///
/// Fails through `error_mapper` when the table is missing, a column is absent,
/// or a column carries an unexpected type. Extra columns only log a warning so
/// deployments can add their own without breaking startup.
pub(crate) async fn validate_postgres_table_schema<E>(
    pool: &Pool<Postgres>,
    table_name: &str,
    expected_columns: &[(&str, &str)],
    error_mapper: impl Fn(String) -> E,
) -> Result<(), E> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT FROM information_schema.tables WHERE table_name = $1)",
    )
    .bind(table_name)
    .fetch_one(pool)
    .await
    .map_err(|e| error_mapper(e.to_string()))?;

    if !table_exists {
        return Err(error_mapper(format!(
            "Schema validation failed: table '{table_name}' does not exist"
        )));
    }

    let actual_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT column_name, data_type FROM information_schema.columns \
         WHERE table_name = $1 ORDER BY column_name",
    )
    .bind(table_name)
    .fetch_all(pool)
    .await
    .map_err(|e| error_mapper(e.to_string()))?;

    for (expected_name, expected_type) in expected_columns {
        match actual_columns
            .iter()
            .find(|(name, _)| name.as_str() == *expected_name)
        {
            Some((_, actual_type)) if actual_type == expected_type => {}
            Some((_, actual_type)) => {
                return Err(error_mapper(format!(
                    "Schema validation failed: column '{expected_name}' has type '{actual_type}' but expected '{expected_type}'"
                )));
            }
            None => {
                return Err(error_mapper(format!(
                    "Schema validation failed: missing column '{expected_name}'"
                )));
            }
        }
    }

    for (actual_name, _) in &actual_columns {
        if !expected_columns
            .iter()
            .any(|(name, _)| *name == actual_name.as_str())
        {
            tracing::warn!("Extra column '{actual_name}' found in table '{table_name}'");
        }
    }

    Ok(())
}
