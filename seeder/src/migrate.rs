use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

/// Applies pending schema changes before anything is seeded.
#[async_trait]
pub trait SchemaMigrator: Send + Sync {
    /// Returns how many migrations were applied.
    async fn apply_pending_migrations(&self) -> Result<usize, DbErr>;
}

/// Runs the workspace's SeaORM migrations.
pub struct SeaOrmMigrator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeaOrmMigrator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> SchemaMigrator for SeaOrmMigrator<'a> {
    async fn apply_pending_migrations(&self) -> Result<usize, DbErr> {
        migration::runner::run_pending_migrations(self.db).await
    }
}
