//! Brings a fresh database into a usable state: migrate, then seed roles and
//! the two starting accounts.
//!
//! Each collection is only seeded while it is empty, so running the bootstrap
//! on every startup is safe. There are no per-record checks and nothing is
//! ever updated or deleted.

use sea_orm::{DatabaseConnection, TransactionTrait};
use services::{AccountStore, RoleService, RoleStore, UserService};

use crate::accounts::SeedAccounts;
use crate::error::BootstrapError;
use crate::migrate::{SchemaMigrator, SeaOrmMigrator};
use crate::seed::{SeedOutcome, run_seeder};
use crate::seeds::{role::RoleSeeder, user::UserSeeder};

/// What one bootstrap run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub migrations_applied: usize,
    pub roles: SeedOutcome,
    pub users: SeedOutcome,
}

/// The bootstrap sequence over borrowed collaborators.
pub struct Bootstrap<'a> {
    migrator: &'a dyn SchemaMigrator,
    roles: &'a dyn RoleStore,
    accounts: &'a dyn AccountStore,
    seed: &'a SeedAccounts,
}

impl<'a> Bootstrap<'a> {
    pub fn new(
        migrator: &'a dyn SchemaMigrator,
        roles: &'a dyn RoleStore,
        accounts: &'a dyn AccountStore,
        seed: &'a SeedAccounts,
    ) -> Self {
        Self {
            migrator,
            roles,
            accounts,
            seed,
        }
    }

    /// Migrates, then seeds roles and accounts. The first error aborts the run.
    pub async fn run(&self) -> Result<BootstrapReport, BootstrapError> {
        let migrations_applied = self.migrate().await?;
        let (roles, users) = self.seed().await?;

        Ok(BootstrapReport {
            migrations_applied,
            roles,
            users,
        })
    }

    pub async fn migrate(&self) -> Result<usize, BootstrapError> {
        let applied = self
            .migrator
            .apply_pending_migrations()
            .await
            .map_err(BootstrapError::Migration)?;
        tracing::info!(applied, "schema up to date");
        Ok(applied)
    }

    /// Seeds roles, then accounts. Role seeding must finish first because the
    /// accounts are assigned roles by name.
    pub async fn seed(&self) -> Result<(SeedOutcome, SeedOutcome), BootstrapError> {
        let roles = run_seeder(&RoleSeeder::new(self.roles), "Roles").await?;
        let users = run_seeder(&UserSeeder::new(self.accounts, self.seed), "Users").await?;
        Ok((roles, users))
    }
}

/// Runs the bootstrap against a SeaORM database.
///
/// With `transactional`, role and account seeding share one transaction that
/// is rolled back on any error. Migrations always run outside it.
pub async fn run_bootstrap(
    db: &DatabaseConnection,
    seed: &SeedAccounts,
    transactional: bool,
) -> Result<BootstrapReport, BootstrapError> {
    let migrator = SeaOrmMigrator::new(db);
    let roles = RoleService::new(db);
    let accounts = UserService::new(db);
    let bootstrap = Bootstrap::new(&migrator, &roles, &accounts, seed);

    if !transactional {
        return bootstrap.run().await;
    }

    let migrations_applied = bootstrap.migrate().await?;

    let txn = db.begin().await.map_err(BootstrapError::Transaction)?;
    let txn_roles = RoleService::new(&txn);
    let txn_accounts = UserService::new(&txn);
    let seeded = Bootstrap::new(&migrator, &txn_roles, &txn_accounts, seed).seed().await;

    match seeded {
        Ok((roles, users)) => {
            txn.commit().await.map_err(BootstrapError::Transaction)?;
            Ok(BootstrapReport {
                migrations_applied,
                roles,
                users,
            })
        }
        Err(err) => {
            tracing::warn!(error = %err, "rolling back seed transaction");
            txn.rollback().await.map_err(BootstrapError::Transaction)?;
            Err(err)
        }
    }
}
