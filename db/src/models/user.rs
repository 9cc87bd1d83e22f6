use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents an application account in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name. Seed accounts use their email address.
    pub username: String,
    /// Upper-cased `username`, used for case-insensitive lookups.
    pub normalized_username: String,
    /// User's unique email address.
    pub email: String,
    /// Upper-cased `email`.
    pub normalized_email: String,
    pub first_name: String,
    pub last_name: String,
    /// Name shown next to the user's posts and comments.
    pub display_name: String,
    pub phone_number: Option<String>,
    pub email_confirmed: bool,
    /// Argon2 PHC string. Never the plain password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRole,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// "First Last", as shown on admin screens.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Normalizes a username or email for uniqueness checks.
pub fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}
