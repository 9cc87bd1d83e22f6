pub mod moderation;
pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use util::paths;

/// Connects to the database named by `DATABASE_PATH`.
///
/// A DSN is used as-is; anything else is treated as a SQLite file path.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = paths::database_url()
        .map_err(|e| DbErr::Custom(format!("failed to prepare database directory: {e}")))?;

    tracing::debug!(%url, "connecting to database");
    Database::connect(&url).await
}
