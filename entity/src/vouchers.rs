use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vouchers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    /// Flat discount in minor currency units.
    pub discount_amount: i64,
    pub currency_unit: String,
    pub starts_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub usage_limit: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_vouchers::Entity")]
    UserVouchers,
    #[sea_orm(has_many = "super::voucher_variants::Entity")]
    VoucherVariants,
}

impl Related<super::user_vouchers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserVouchers.def()
    }
}

impl Related<super::voucher_variants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VoucherVariants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
