use colored::*;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

use crate::Migrator;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration, one step at a time, printing a status line
/// for each. Applied migrations are recorded, so a second call is a no-op.
///
/// Returns the number of migrations applied. Stops at the first failure.
pub async fn run_pending_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        println!("{}", "Nothing to migrate".dimmed());
        return Ok(0);
    }

    println!("Running migrations...");
    for migration in &pending {
        run_migration(db, migration.name()).await?;
    }

    Ok(pending.len())
}

async fn run_migration(db: &DatabaseConnection, name: &str) -> Result<(), DbErr> {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match Migrator::up(db, Some(1)).await {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Err(err) => {
            println!("{}", "failed".red());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn applies_all_then_nothing() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let applied = run_pending_migrations(&db).await.unwrap();
        assert_eq!(applied, Migrator::migrations().len());

        let again = run_pending_migrations(&db).await.unwrap();
        assert_eq!(again, 0);

        let manager = SchemaManager::new(&db);
        for table in ["users", "roles", "user_roles"] {
            assert!(manager.has_table(table).await.unwrap(), "missing table {table}");
        }
    }
}
