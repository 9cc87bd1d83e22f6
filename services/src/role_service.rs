use async_trait::async_trait;
use chrono::Utc;
use db::models::role::{self, ActiveModel, Column, Entity, Model};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::error::{StoreError, StoreResult};
use crate::store::RoleStore;

/// SeaORM-backed role store.
///
/// Generic over the connection so the same code runs on a pooled
/// `DatabaseConnection` or inside a `DatabaseTransaction`.
pub struct RoleService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Case-insensitive lookup by role name.
    pub async fn find_by_name(&self, name: &str) -> StoreResult<Option<Model>> {
        let found = Entity::find()
            .filter(Column::NormalizedName.eq(role::normalize(name)))
            .one(self.db)
            .await?;
        Ok(found)
    }

    /// All roles, oldest first.
    pub async fn all(&self) -> StoreResult<Vec<Model>> {
        let roles = Entity::find().order_by_asc(Column::Id).all(self.db).await?;
        Ok(roles)
    }
}

#[async_trait]
impl<'a, C> RoleStore for RoleService<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn any_role_exists(&self) -> StoreResult<bool> {
        Ok(Entity::find().one(self.db).await?.is_some())
    }

    async fn create_role(&self, name: &str) -> StoreResult<Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidRole("role name cannot be empty".into()));
        }
        if self.find_by_name(name).await?.is_some() {
            return Err(StoreError::DuplicateRole(name.to_string()));
        }

        let model = ActiveModel {
            name: Set(name.to_string()),
            normalized_name: Set(role::normalize(name)),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        tracing::debug!(role = %model.name, id = model.id, "created role");
        Ok(model)
    }
}
