use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoucherDto {
    pub id: i32,
    pub code: String,
    pub description: Option<String>,
    pub discount_amount: i64,
    pub currency_unit: String,
    pub starts_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub usage_limit: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::vouchers::Model> for VoucherDto {
    fn from(voucher: entity::vouchers::Model) -> Self {
        Self {
            id: voucher.id,
            code: voucher.code,
            description: voucher.description,
            discount_amount: voucher.discount_amount,
            currency_unit: voucher.currency_unit,
            starts_at: voucher.starts_at,
            expires_at: voucher.expires_at,
            usage_limit: voucher.usage_limit,
            created_at: voucher.created_at,
            updated_at: voucher.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateVoucherDto {
    pub code: String,
    pub description: Option<String>,
    pub discount_amount: i64,
    #[serde(default = "default_currency")]
    pub currency_unit: String,
    pub starts_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default = "default_usage_limit")]
    pub usage_limit: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateVoucherDto {
    pub description: Option<String>,
    pub discount_amount: Option<i64>,
    pub starts_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub usage_limit: Option<i32>,
}

/// Attach or detach product variants from a voucher.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VoucherVariantsDto {
    pub variant_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserVoucherDto {
    pub id: i32,
    pub user_id: i32,
    pub voucher_id: i32,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user_vouchers::Model> for UserVoucherDto {
    fn from(claim: entity::user_vouchers::Model) -> Self {
        Self {
            id: claim.id,
            user_id: claim.user_id,
            voucher_id: claim.voucher_id,
            used_at: claim.used_at,
            created_at: claim.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClaimVoucherDto {
    pub voucher_id: i32,
}

fn default_currency() -> String {
    "VND".to_string()
}

fn default_usage_limit() -> i32 {
    1
}
