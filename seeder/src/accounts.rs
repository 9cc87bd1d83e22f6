use services::AccountProfile;
use util::config::{AppConfig, SeedProfileConfig};

use crate::error::BootstrapError;

/// The two accounts created on an empty database, plus their shared password.
#[derive(Debug, Clone)]
pub struct SeedAccounts {
    pub admin: AccountProfile,
    pub moderator: AccountProfile,
    pub password: String,
}

impl SeedAccounts {
    /// Builds the seed accounts from configuration.
    ///
    /// Fails when no seed password is configured.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, BootstrapError> {
        let password = cfg
            .seed_password
            .clone()
            .ok_or(BootstrapError::MissingSeedPassword)?;

        Ok(Self {
            admin: seed_profile(&cfg.seed_admin),
            moderator: seed_profile(&cfg.seed_moderator),
            password,
        })
    }
}

/// Seed accounts log in with their email and start out confirmed.
fn seed_profile(cfg: &SeedProfileConfig) -> AccountProfile {
    AccountProfile {
        email: cfg.email.clone(),
        username: cfg.email.clone(),
        first_name: cfg.first_name.clone(),
        last_name: cfg.last_name.clone(),
        display_name: cfg.display_name.clone(),
        phone_number: Some(cfg.phone_number.clone()),
        email_confirmed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(password: Option<&str>) -> AppConfig {
        let profile = |email: &str| SeedProfileConfig {
            email: email.to_string(),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            display_name: "Shown".to_string(),
            phone_number: "(800) 555-0100".to_string(),
        };

        AppConfig {
            project_name: "blog".to_string(),
            log_level: "info".to_string(),
            log_file: "seeder.log".to_string(),
            log_to_stdout: false,
            database_path: "sqlite::memory:".to_string(),
            seed_transactional: false,
            seed_admin: profile("root@example.org"),
            seed_moderator: profile("mod@example.org"),
            seed_password: password.map(str::to_string),
        }
    }

    #[test]
    fn profiles_use_email_as_username() {
        let seed = SeedAccounts::from_config(&config(Some("Abc&123!"))).unwrap();

        assert_eq!(seed.admin.username, "root@example.org");
        assert_eq!(seed.moderator.username, "mod@example.org");
        assert!(seed.admin.email_confirmed && seed.moderator.email_confirmed);
        assert_eq!(seed.admin.phone_number.as_deref(), Some("(800) 555-0100"));
        assert_eq!(seed.password, "Abc&123!");
    }

    #[test]
    fn missing_password_is_an_error() {
        let err = SeedAccounts::from_config(&config(None)).unwrap_err();
        assert!(matches!(err, BootstrapError::MissingSeedPassword));
    }
}
