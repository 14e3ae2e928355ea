use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct VoucherFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    discount_amount: i64,
    starts_at: chrono::DateTime<Utc>,
    expires_at: chrono::DateTime<Utc>,
    usage_limit: i32,
}

impl<'a> VoucherFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("SALE{id:04}"),
            discount_amount: 10_000,
            starts_at: Utc::now() - Duration::hours(1),
            expires_at: Utc::now() + Duration::days(7),
            usage_limit: 5,
        }
    }

    pub fn discount_amount(mut self, discount_amount: i64) -> Self {
        self.discount_amount = discount_amount;
        self
    }

    pub fn expires_at(mut self, expires_at: chrono::DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn usage_limit(mut self, usage_limit: i32) -> Self {
        self.usage_limit = usage_limit;
        self
    }

    pub async fn build(self) -> Result<entity::vouchers::Model, DbErr> {
        let now = Utc::now();
        entity::vouchers::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.code),
            description: ActiveValue::Set(None),
            discount_amount: ActiveValue::Set(self.discount_amount),
            currency_unit: ActiveValue::Set("VND".to_string()),
            starts_at: ActiveValue::Set(self.starts_at),
            expires_at: ActiveValue::Set(self.expires_at),
            usage_limit: ActiveValue::Set(self.usage_limit),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_voucher(db: &DatabaseConnection) -> Result<entity::vouchers::Model, DbErr> {
    VoucherFactory::new(db).build().await
}
