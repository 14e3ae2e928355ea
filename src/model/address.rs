use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddressDto {
    pub id: i32,
    pub user_id: i32,
    pub receiver_name: String,
    pub phone: String,
    pub province_id: i32,
    pub district_id: i32,
    pub ward_code: String,
    pub street: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::addresses::Model> for AddressDto {
    fn from(address: entity::addresses::Model) -> Self {
        Self {
            id: address.id,
            user_id: address.user_id,
            receiver_name: address.receiver_name,
            phone: address.phone,
            province_id: address.province_id,
            district_id: address.district_id,
            ward_code: address.ward_code,
            street: address.street,
            is_default: address.is_default,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAddressDto {
    pub receiver_name: String,
    pub phone: String,
    pub province_id: i32,
    pub district_id: i32,
    pub ward_code: String,
    pub street: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateAddressDto {
    pub receiver_name: Option<String>,
    pub phone: Option<String>,
    pub province_id: Option<i32>,
    pub district_id: Option<i32>,
    pub ward_code: Option<String>,
    pub street: Option<String>,
    pub is_default: Option<bool>,
}
