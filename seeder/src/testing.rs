//! In-memory stand-ins for the seeder's collaborators.

use async_trait::async_trait;
use chrono::Utc;
use db::models::{role, user};
use sea_orm::DbErr;
use services::{AccountProfile, AccountStore, RoleStore, StoreError, StoreResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::accounts::SeedAccounts;
use crate::migrate::SchemaMigrator;

pub const SEED_PASSWORD: &str = "Abc&123!";

pub fn seed_accounts() -> SeedAccounts {
    let profile = |email: &str, display: &str| AccountProfile {
        email: email.to_string(),
        username: email.to_string(),
        first_name: "Seed".to_string(),
        last_name: display.to_string(),
        display_name: display.to_string(),
        phone_number: Some("(800) 555-1212".to_string()),
        email_confirmed: true,
    };

    SeedAccounts {
        admin: profile("admin@blog.test", "Admin"),
        moderator: profile("moderator@blog.test", "Moderator"),
        password: SEED_PASSWORD.to_string(),
    }
}

/// Role and account store backed by vectors. Role names are shared between
/// both halves, like tables in one database.
#[derive(Default)]
pub struct FakeStore {
    roles: Mutex<Vec<String>>,
    accounts: Mutex<Vec<(user::Model, String)>>,
    memberships: Mutex<Vec<(i64, String)>>,
    fail_on_role: Option<String>,
}

impl FakeStore {
    pub fn with_roles(names: &[&str]) -> Self {
        let store = Self::default();
        store
            .roles
            .lock()
            .unwrap()
            .extend(names.iter().map(|n| n.to_string()));
        store
    }

    /// `create_role` fails for `name` with a database error.
    pub fn failing_on_role(name: &str) -> Self {
        Self {
            fail_on_role: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn insert_existing(&self, username: &str) {
        let mut accounts = self.accounts.lock().unwrap();
        let id = accounts.len() as i64 + 1;
        accounts.push((account(id, username), "unknown".to_string()));
    }

    pub fn names(&self) -> Vec<String> {
        self.roles.lock().unwrap().clone()
    }

    pub fn usernames(&self) -> Vec<String> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .map(|(u, _)| u.username.clone())
            .collect()
    }

    pub fn passwords(&self) -> Vec<String> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn roles_of(&self, username: &str) -> Vec<String> {
        let id = self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.id);

        self.memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|(user_id, _)| Some(*user_id) == id)
            .map(|(_, role)| role.clone())
            .collect()
    }
}

fn account(id: i64, username: &str) -> user::Model {
    let now = Utc::now();
    user::Model {
        id,
        username: username.to_string(),
        normalized_username: user::normalize(username),
        email: username.to_string(),
        normalized_email: user::normalize(username),
        first_name: String::new(),
        last_name: String::new(),
        display_name: String::new(),
        phone_number: None,
        email_confirmed: false,
        password_hash: String::new(),
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl RoleStore for FakeStore {
    async fn any_role_exists(&self) -> StoreResult<bool> {
        Ok(!self.roles.lock().unwrap().is_empty())
    }

    async fn create_role(&self, name: &str) -> StoreResult<role::Model> {
        if self.fail_on_role.as_deref() == Some(name) {
            return Err(StoreError::Database(DbErr::Custom(format!("insert of {name} failed"))));
        }

        let mut roles = self.roles.lock().unwrap();
        if roles.iter().any(|r| r == name) {
            return Err(StoreError::DuplicateRole(name.to_string()));
        }
        roles.push(name.to_string());

        Ok(role::Model {
            id: roles.len() as i64,
            name: name.to_string(),
            normalized_name: role::normalize(name),
            created_at: Utc::now(),
        })
    }
}

#[async_trait]
impl AccountStore for FakeStore {
    async fn any_account_exists(&self) -> StoreResult<bool> {
        Ok(!self.accounts.lock().unwrap().is_empty())
    }

    async fn create_account(&self, profile: &AccountProfile, password: &str) -> StoreResult<user::Model> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|(u, _)| u.username == profile.username) {
            return Err(StoreError::DuplicateUsername(profile.username.clone()));
        }

        let model = account(accounts.len() as i64 + 1, &profile.username);
        accounts.push((model.clone(), password.to_string()));
        Ok(model)
    }

    async fn assign_role(&self, account: &user::Model, role_name: &str) -> StoreResult<()> {
        if !self.roles.lock().unwrap().iter().any(|r| r == role_name) {
            return Err(StoreError::RoleNotFound(role_name.to_string()));
        }
        self.memberships
            .lock()
            .unwrap()
            .push((account.id, role_name.to_string()));
        Ok(())
    }
}

/// Counts calls; optionally fails every one.
#[derive(Default)]
pub struct FakeMigrator {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl FakeMigrator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SchemaMigrator for FakeMigrator {
    async fn apply_pending_migrations(&self) -> Result<usize, DbErr> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DbErr::Migration("table users already exists".into()));
        }
        Ok(0)
    }
}
