use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find()
            .filter(entity::users::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Inserts a new inactive account with its activation code.
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        full_name: String,
        phone: Option<String>,
        active_code: String,
    ) -> Result<entity::users::Model, DbErr> {
        let now = Utc::now();

        entity::users::ActiveModel {
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            full_name: ActiveValue::Set(full_name),
            phone: ActiveValue::Set(phone),
            role: ActiveValue::Set("USER".to_string()),
            active: ActiveValue::Set(false),
            active_code: ActiveValue::Set(Some(active_code)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Flips the account active and clears the activation code.
    pub async fn activate(&self, user: entity::users::Model) -> Result<entity::users::Model, DbErr> {
        let mut model: entity::users::ActiveModel = user.into();
        model.active = ActiveValue::Set(true);
        model.active_code = ActiveValue::Set(None);
        model.updated_at = ActiveValue::Set(Utc::now());
        model.update(self.db).await
    }

    pub async fn set_active_code(
        &self,
        user: entity::users::Model,
        code: String,
    ) -> Result<entity::users::Model, DbErr> {
        let mut model: entity::users::ActiveModel = user.into();
        model.active_code = ActiveValue::Set(Some(code));
        model.updated_at = ActiveValue::Set(Utc::now());
        model.update(self.db).await
    }

    pub async fn set_password_hash(
        &self,
        user: entity::users::Model,
        password_hash: String,
    ) -> Result<entity::users::Model, DbErr> {
        let mut model: entity::users::ActiveModel = user.into();
        model.password_hash = ActiveValue::Set(password_hash);
        model.updated_at = ActiveValue::Set(Utc::now());
        model.update(self.db).await
    }
}
