//! Collaborator interfaces used by the bootstrap seeder.
//!
//! The seeder only talks to these traits, so it can run against the SeaORM
//! services in this crate or against in-memory fakes in tests.

use async_trait::async_trait;
use db::models::{role, user};
use validator::{Validate, ValidationError};

use crate::error::StoreResult;

/// Profile fields accepted when creating an account.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AccountProfile {
    #[validate(custom(function = "validate_not_blank"), email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub phone_number: Option<String>,
    pub email_confirmed: bool,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Field cannot be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Create and query role records.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// True when at least one role exists.
    async fn any_role_exists(&self) -> StoreResult<bool>;

    async fn create_role(&self, name: &str) -> StoreResult<role::Model>;
}

/// Create and query accounts and their role memberships.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// True when at least one account exists.
    async fn any_account_exists(&self) -> StoreResult<bool>;

    /// Creates an account. `password` is the plain credential; stores hash it.
    async fn create_account(&self, profile: &AccountProfile, password: &str) -> StoreResult<user::Model>;

    /// Grants `account` membership of the role called `role_name`.
    async fn assign_role(&self, account: &user::Model, role_name: &str) -> StoreResult<()>;
}
