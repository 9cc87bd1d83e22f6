use async_trait::async_trait;
use db::models::BlogRole;
use sea_orm::Iterable;
use services::RoleStore;

use crate::error::BootstrapError;
use crate::seed::{SeedOutcome, Seeder};

/// Creates one role per `BlogRole` variant when no roles exist yet.
pub struct RoleSeeder<'a> {
    roles: &'a dyn RoleStore,
}

impl<'a> RoleSeeder<'a> {
    pub fn new(roles: &'a dyn RoleStore) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl<'a> Seeder for RoleSeeder<'a> {
    async fn seed(&self) -> Result<SeedOutcome, BootstrapError> {
        if self.roles.any_role_exists().await? {
            return Ok(SeedOutcome::Skipped);
        }

        let mut created = 0;
        for role in BlogRole::iter() {
            self.roles.create_role(&role.name()).await?;
            created += 1;
        }

        Ok(SeedOutcome::Seeded(created))
    }
}
