use std::{env, sync::LazyLock};

use crate::storage::DB_TABLE_PREFIX;

/// Identities table name
pub(crate) static DB_TABLE_IDENTITIES: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_IDENTITIES")
        .unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "identities"))
});
