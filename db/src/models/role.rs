use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A named permission category in the `roles` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Role name, e.g. `Administrator`.
    pub name: String,
    /// Upper-cased `name`, used for case-insensitive lookups.
    pub normalized_name: String,
    pub created_at: DateTime<Utc>,
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

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Normalizes a role name for uniqueness checks.
pub fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}

/// The closed set of roles the blog knows about.
///
/// `Display` yields the stored role name; declaration order is seeding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString, Deserialize, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum BlogRole {
    Administrator,
    Moderator,
}

impl BlogRole {
    /// Stored role name.
    pub fn name(&self) -> String {
        self.to_string()
    }
}
