use sea_orm::DbErr;
use services::StoreError;

/// Errors that abort the bootstrap sequence
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database connection failed: {0}")]
    Connection(#[source] DbErr),

    #[error("Migration failed: {0}")]
    Migration(#[source] DbErr),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Transaction failed: {0}")]
    Transaction(#[source] DbErr),

    #[error("SEED_ACCOUNT_PASSWORD is not set")]
    MissingSeedPassword,
}
