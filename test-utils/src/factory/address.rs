use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    receiver_name: String,
    phone: String,
    province_id: i32,
    district_id: i32,
    ward_code: String,
    street: String,
    is_default: bool,
}

impl<'a> AddressFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            receiver_name: format!("Receiver {id}"),
            phone: format!("09111111{id:02}"),
            province_id: 201,
            district_id: 1442,
            ward_code: "20101".to_string(),
            street: format!("{id} Test Street"),
            is_default: false,
        }
    }

    pub fn district(mut self, district_id: i32, ward_code: impl Into<String>) -> Self {
        self.district_id = district_id;
        self.ward_code = ward_code.into();
        self
    }

    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub async fn build(self) -> Result<entity::addresses::Model, DbErr> {
        let now = Utc::now();
        entity::addresses::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            receiver_name: ActiveValue::Set(self.receiver_name),
            phone: ActiveValue::Set(self.phone),
            province_id: ActiveValue::Set(self.province_id),
            district_id: ActiveValue::Set(self.district_id),
            ward_code: ActiveValue::Set(self.ward_code),
            street: ActiveValue::Set(self.street),
            is_default: ActiveValue::Set(self.is_default),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_address(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::addresses::Model, DbErr> {
    AddressFactory::new(db, user_id).build().await
}
