use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ShopFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    phone: String,
}

impl<'a> ShopFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Shop {id}"),
            phone: format!("09000000{id:02}"),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::shops::Model, DbErr> {
        let now = Utc::now();
        entity::shops::ActiveModel {
            id: ActiveValue::NotSet,
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_shop(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::shops::Model, DbErr> {
    ShopFactory::new(db, owner_id).build().await
}
