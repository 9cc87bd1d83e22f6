use sea_orm::DbErr;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the role and account stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Role '{0}' already exists")]
    DuplicateRole(String),

    #[error("Role '{0}' does not exist")]
    RoleNotFound(String),

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("Email '{0}' is already taken")]
    DuplicateEmail(String),

    #[error("Password does not meet policy: {}", .0.join("; "))]
    PasswordPolicy(Vec<String>),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Account {user_id} already holds role '{role}'")]
    AlreadyInRole { user_id: i64, role: String },
}
