//! Account lifecycle and credential flows: signup, activation, password
//! recovery, login, password change.
//!
//! Activation codes and temporary passwords are logged instead of mailed;
//! message delivery is an external collaborator this system does not own.

use rand::Rng;
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::{
    model::auth::{ChangePasswordDto, LoginDto, SignupDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::JwtKeys,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers an inactive account and issues its activation code.
    pub async fn signup(&self, dto: SignupDto) -> Result<entity::users::Model, AppError> {
        if !dto.email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if dto.password.len() < 8 {
            return Err(AppError::BadRequest(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        if dto.full_name.trim().is_empty() {
            return Err(AppError::BadRequest("Full name is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let code = activation_code();
        let user = user_repo
            .create(
                dto.email,
                hash_password(&dto.password),
                dto.full_name,
                dto.phone,
                code.clone(),
            )
            .await
            .map_err(|err| {
                tracing::error!("Failed to create account: {}", err);
                AppError::BadRequest("Could not create account".to_string())
            })?;

        // Mail delivery is out of scope; operators read the code from logs.
        tracing::info!("Activation code for {}: {}", user.email, code);

        Ok(user)
    }

    /// Activates an account when the submitted code matches.
    pub async fn check_code(&self, email: &str, code: &str) -> Result<entity::users::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("Account not found".to_string()));
        };

        if user.active {
            return Err(AppError::BadRequest(
                "Account is already active".to_string(),
            ));
        }

        if user.active_code.as_deref() != Some(code) {
            return Err(AppError::BadRequest("Invalid activation code".to_string()));
        }

        let user = user_repo.activate(user).await?;
        tracing::info!("Activated account {}", user.email);

        Ok(user)
    }

    /// Regenerates the activation code for a still-inactive account.
    pub async fn retry_active(&self, email: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("Account not found".to_string()));
        };

        if user.active {
            return Err(AppError::BadRequest(
                "Account is already active".to_string(),
            ));
        }

        let code = activation_code();
        let user = user_repo.set_active_code(user, code.clone()).await?;
        tracing::info!("New activation code for {}: {}", user.email, code);

        Ok(())
    }

    /// Replaces the password with a random temporary one.
    pub async fn retry_password(&self, email: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("Account not found".to_string()));
        };

        let temporary = temporary_password();
        let user = user_repo
            .set_password_hash(user, hash_password(&temporary))
            .await?;
        tracing::info!("Temporary password for {}: {}", user.email, temporary);

        Ok(())
    }

    /// Verifies credentials and returns a bearer token plus the user.
    pub async fn login(&self, dto: LoginDto) -> Result<(String, entity::users::Model), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&dto.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        let token = self.jwt.issue(&user)?;
        tracing::info!("User {} logged in", user.id);

        Ok((token, user))
    }

    /// Replaces the password after verifying the old one.
    pub async fn change_password(
        &self,
        user: entity::users::Model,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        if dto.new_password.len() < 8 {
            return Err(AppError::BadRequest(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        if !verify_password(&dto.old_password, &user.password_hash) {
            return Err(AppError::BadRequest("Old password is incorrect".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .set_password_hash(user, hash_password(&dto.new_password))
            .await?;
        tracing::info!("User {} changed password", user.id);

        Ok(())
    }
}

/// Digests a password with a fresh random salt, stored as `salt$hex`.
pub fn hash_password(password: &str) -> String {
    let salt: u128 = rand::rng().random();
    let salt = format!("{salt:032x}");
    format!("{salt}${}", digest(&salt, password))
}

/// Constant-shape verification against a stored `salt$hex` digest.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, expected)) => digest(salt, password) == expected,
        None => false,
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());

    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

fn activation_code() -> String {
    rand::rng().random_range(100_000..=999_999u32).to_string()
}

fn temporary_password() -> String {
    let value: u128 = rand::rng().random();
    format!("{value:032x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_correct_password() {
        let stored = hash_password("s3cret-pass");
        assert!(verify_password("s3cret-pass", &stored));
    }

    #[test]
    fn rejects_wrong_password() {
        let stored = hash_password("s3cret-pass");
        assert!(!verify_password("other-pass", &stored));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let first = hash_password("same");
        let second = hash_password("same");
        assert_ne!(first, second);
        assert!(verify_password("same", &first));
        assert!(verify_password("same", &second));
    }

    #[test]
    fn rejects_malformed_stored_digest() {
        assert!(!verify_password("anything", "no-dollar-separator"));
    }

    #[test]
    fn activation_code_is_six_digits() {
        let code = activation_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}
