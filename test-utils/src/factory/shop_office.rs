use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ShopOfficeFactory<'a> {
    db: &'a DatabaseConnection,
    shop_id: i32,
    name: String,
    province_id: i32,
    district_id: i32,
    ward_code: String,
    street: String,
    is_pickup: bool,
}

impl<'a> ShopOfficeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, shop_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            shop_id,
            name: format!("Office {id}"),
            province_id: 202,
            district_id: 1443,
            ward_code: "20201".to_string(),
            street: format!("{id} Warehouse Road"),
            is_pickup: true,
        }
    }

    pub fn is_pickup(mut self, is_pickup: bool) -> Self {
        self.is_pickup = is_pickup;
        self
    }

    pub async fn build(self) -> Result<entity::shop_offices::Model, DbErr> {
        let now = Utc::now();
        entity::shop_offices::ActiveModel {
            id: ActiveValue::NotSet,
            shop_id: ActiveValue::Set(self.shop_id),
            name: ActiveValue::Set(self.name),
            province_id: ActiveValue::Set(self.province_id),
            district_id: ActiveValue::Set(self.district_id),
            ward_code: ActiveValue::Set(self.ward_code),
            street: ActiveValue::Set(self.street),
            is_pickup: ActiveValue::Set(self.is_pickup),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_pickup_office(
    db: &DatabaseConnection,
    shop_id: i32,
) -> Result<entity::shop_offices::Model, DbErr> {
    ShopOfficeFactory::new(db, shop_id).build().await
}
