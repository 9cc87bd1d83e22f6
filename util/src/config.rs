//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables.
//! It provides thread-safe access and mutation for tests or runtime overrides.

use std::env;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    /// Wrap role and account seeding in a single transaction.
    pub seed_transactional: bool,
    pub seed_admin: SeedProfileConfig,
    pub seed_moderator: SeedProfileConfig,
    /// Password shared by both seed accounts. Has no default.
    pub seed_password: Option<String>,
}

/// Profile values for one seed account, read from `SEED_<PREFIX>_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedProfileConfig {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub phone_number: String,
}

impl SeedProfileConfig {
    fn from_env(prefix: &str, defaults: [&str; 5]) -> Self {
        let var = |key: &str, default: &str| {
            env::var(format!("SEED_{prefix}_{key}")).unwrap_or_else(|_| default.to_string())
        };

        Self {
            email: var("EMAIL", defaults[0]),
            first_name: var("FIRST_NAME", defaults[1]),
            last_name: var("LAST_NAME", defaults[2]),
            display_name: var("DISPLAY_NAME", defaults[3]),
            phone_number: var("PHONE", defaults[4]),
        }
    }
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn flag(key: &str) -> bool {
    env::var(key)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every field has a default except the seed password, which stays `None`
    /// until `SEED_ACCOUNT_PASSWORD` is set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "blog".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "seeder=info,services=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "seeder.log".into()),
            log_to_stdout: flag("LOG_TO_STDOUT"),
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "data/blog.db".into()),
            seed_transactional: flag("SEED_TRANSACTIONAL"),
            seed_admin: SeedProfileConfig::from_env(
                "ADMIN",
                ["admin@blog.local", "Site", "Administrator", "Admin", "(800) 555-1212"],
            ),
            seed_moderator: SeedProfileConfig::from_env(
                "MODERATOR",
                ["moderator@blog.local", "Site", "Moderator", "Moderator", "(800) 555-1213"],
            ),
            seed_password: env::var("SEED_ACCOUNT_PASSWORD").ok().filter(|p| !p.is_empty()),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_seed_transactional(value: bool) {
        AppConfig::set_field(|cfg| cfg.seed_transactional = value);
    }

    pub fn set_seed_password(value: Option<String>) {
        AppConfig::set_field(|cfg| cfg.seed_password = value);
    }
}

// --- Free accessors ---

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn seed_transactional() -> bool {
    AppConfig::global().seed_transactional
}
