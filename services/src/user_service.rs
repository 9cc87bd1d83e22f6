use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use async_trait::async_trait;
use chrono::Utc;
use db::models::{
    role,
    user::{self, ActiveModel, Column, Entity, Model},
    user_role,
};
use rand::rngs::OsRng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use validator::Validate;

use crate::error::{StoreError, StoreResult};
use crate::role_service::RoleService;
use crate::store::{AccountProfile, AccountStore};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Checks `password` against the account password policy.
///
/// Every unmet rule is reported, not just the first.
pub fn validate_password(password: &str) -> StoreResult<()> {
    let mut problems = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        problems.push(format!("must be at least {MIN_PASSWORD_LENGTH} characters long"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("must contain at least one digit".to_string());
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        problems.push("must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        problems.push("must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        problems.push("must contain at least one non-alphanumeric character".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(StoreError::PasswordPolicy(problems))
    }
}

/// Hashes `password` with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::Hashing(e.to_string()))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(user: &Model, password: &str) -> bool {
    let parsed = match PasswordHash::new(&user.password_hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// SeaORM-backed account store.
pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Case-insensitive lookup by email.
    pub async fn find_by_email(&self, email: &str) -> StoreResult<Option<Model>> {
        let found = Entity::find()
            .filter(Column::NormalizedEmail.eq(user::normalize(email)))
            .one(self.db)
            .await?;
        Ok(found)
    }

    /// Names of the roles `user_id` holds, in role creation order.
    pub async fn role_names(&self, user_id: i64) -> StoreResult<Vec<String>> {
        let names = role::Entity::find()
            .inner_join(user_role::Entity)
            .filter(user_role::Column::UserId.eq(user_id))
            .order_by_asc(role::Column::Id)
            .select_only()
            .column(role::Column::Name)
            .into_tuple::<String>()
            .all(self.db)
            .await?;
        Ok(names)
    }

    pub async fn count(&self) -> StoreResult<u64> {
        Ok(Entity::find().count(self.db).await?)
    }
}

#[async_trait]
impl<'a, C> AccountStore for UserService<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn any_account_exists(&self) -> StoreResult<bool> {
        Ok(Entity::find().one(self.db).await?.is_some())
    }

    async fn create_account(&self, profile: &AccountProfile, password: &str) -> StoreResult<Model> {
        profile
            .validate()
            .map_err(|e| StoreError::InvalidAccount(e.to_string()))?;
        validate_password(password)?;

        let normalized_username = user::normalize(&profile.username);
        let normalized_email = user::normalize(&profile.email);

        let taken_username = Entity::find()
            .filter(Column::NormalizedUsername.eq(normalized_username.as_str()))
            .one(self.db)
            .await?;
        if taken_username.is_some() {
            return Err(StoreError::DuplicateUsername(profile.username.clone()));
        }
        if self.find_by_email(&profile.email).await?.is_some() {
            return Err(StoreError::DuplicateEmail(profile.email.clone()));
        }

        let now = Utc::now();
        let model = ActiveModel {
            username: Set(profile.username.trim().to_string()),
            normalized_username: Set(normalized_username),
            email: Set(profile.email.trim().to_string()),
            normalized_email: Set(normalized_email),
            first_name: Set(profile.first_name.clone()),
            last_name: Set(profile.last_name.clone()),
            display_name: Set(profile.display_name.clone()),
            phone_number: Set(profile.phone_number.clone()),
            email_confirmed: Set(profile.email_confirmed),
            password_hash: Set(hash_password(password)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        tracing::debug!(user_id = model.id, username = %model.username, "created account");
        Ok(model)
    }

    async fn assign_role(&self, account: &Model, role_name: &str) -> StoreResult<()> {
        let role = RoleService::new(self.db)
            .find_by_name(role_name)
            .await?
            .ok_or_else(|| StoreError::RoleNotFound(role_name.to_string()))?;

        let existing = user_role::Entity::find_by_id((account.id, role.id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Err(StoreError::AlreadyInRole {
                user_id: account.id,
                role: role.name,
            });
        }

        user_role::ActiveModel {
            user_id: Set(account.id),
            role_id: Set(role.id),
        }
        .insert(self.db)
        .await?;

        tracing::debug!(user_id = account.id, role = %role.name, "assigned role");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RoleStore;
    use db::test_utils::setup_test_db;

    const PASSWORD: &str = "Abc&123!";

    fn profile(email: &str) -> AccountProfile {
        AccountProfile {
            email: email.to_string(),
            username: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            display_name: "Tester".to_string(),
            phone_number: Some("(800) 555-0000".to_string()),
            email_confirmed: true,
        }
    }

    #[test]
    fn test_password_policy_accepts_strong_password() {
        assert!(validate_password(PASSWORD).is_ok());
    }

    #[test]
    fn test_password_policy_lists_every_problem() {
        match validate_password("abc") {
            Err(StoreError::PasswordPolicy(problems)) => {
                assert_eq!(problems.len(), 4);
                assert!(problems.iter().any(|p| p.contains("at least 6")));
                assert!(problems.iter().any(|p| p.contains("uppercase")));
            }
            other => panic!("expected policy error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_account_hashes_password() {
        let db = setup_test_db().await;
        let users = UserService::new(&db);

        assert!(!users.any_account_exists().await.unwrap());

        let user = users
            .create_account(&profile("writer@blog.local"), PASSWORD)
            .await
            .expect("Failed to create account");

        assert_eq!(user.normalized_email, "WRITER@BLOG.LOCAL");
        assert!(user.email_confirmed);
        assert_ne!(user.password_hash, PASSWORD);
        assert!(verify_password(&user, PASSWORD));
        assert!(!verify_password(&user, "wrong"));
        assert!(users.any_account_exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let db = setup_test_db().await;
        let users = UserService::new(&db);

        users.create_account(&profile("a@blog.local"), PASSWORD).await.unwrap();

        let mut clash = profile("A@BLOG.LOCAL");
        clash.username = "someone-else".to_string();
        let err = users.create_account(&clash, PASSWORD).await.unwrap_err();

        assert!(matches!(err, StoreError::DuplicateEmail(_)));
        assert_eq!(users.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let db = setup_test_db().await;
        let users = UserService::new(&db);

        let err = users.create_account(&profile("not-an-email"), PASSWORD).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidAccount(_)));
    }

    #[tokio::test]
    async fn test_blank_username_is_rejected() {
        let db = setup_test_db().await;
        let users = UserService::new(&db);

        let mut blank = profile("a@blog.local");
        blank.username = "   ".to_string();
        let err = users.create_account(&blank, PASSWORD).await.unwrap_err();

        assert!(matches!(err, StoreError::InvalidAccount(_)));
        assert_eq!(users.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_weak_password_creates_nothing() {
        let db = setup_test_db().await;
        let users = UserService::new(&db);

        let err = users.create_account(&profile("a@blog.local"), "password").await.unwrap_err();
        assert!(matches!(err, StoreError::PasswordPolicy(_)));
        assert_eq!(users.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_assign_role() {
        let db = setup_test_db().await;
        let roles = RoleService::new(&db);
        let users = UserService::new(&db);

        roles.create_role("Administrator").await.unwrap();
        roles.create_role("Moderator").await.unwrap();
        let user = users.create_account(&profile("a@blog.local"), PASSWORD).await.unwrap();

        users.assign_role(&user, "Moderator").await.unwrap();
        users.assign_role(&user, "administrator").await.unwrap();

        let names = users.role_names(user.id).await.unwrap();
        assert_eq!(names, vec!["Administrator", "Moderator"]);

        let again = users.assign_role(&user, "Moderator").await.unwrap_err();
        assert!(matches!(again, StoreError::AlreadyInRole { .. }));

        let missing = users.assign_role(&user, "Author").await.unwrap_err();
        assert!(matches!(missing, StoreError::RoleNotFound(name) if name == "Author"));
    }
}
