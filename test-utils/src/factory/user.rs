//! User factory for creating test accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Defaults to an active USER account with a unique email.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password_hash: String,
    full_name: String,
    phone: Option<String>,
    role: String,
    active: bool,
    active_code: Option<String>,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{id}@example.com"),
            password_hash: "salt$0000".to_string(),
            full_name: format!("Test User {id}"),
            phone: None,
            role: "USER".to_string(),
            active: true,
            active_code: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn active_code(mut self, active_code: Option<String>) -> Self {
        self.active_code = active_code;
        self
    }

    pub async fn build(self) -> Result<entity::users::Model, DbErr> {
        let now = Utc::now();
        entity::users::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            full_name: ActiveValue::Set(self.full_name),
            phone: ActiveValue::Set(self.phone),
            role: ActiveValue::Set(self.role),
            active: ActiveValue::Set(self.active),
            active_code: ActiveValue::Set(self.active_code),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::users::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::users::Model, DbErr> {
    UserFactory::new(db).role("ADMIN").build().await
}
