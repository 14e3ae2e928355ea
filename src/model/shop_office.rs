use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShopOfficeDto {
    pub id: i32,
    pub shop_id: i32,
    pub name: String,
    pub province_id: i32,
    pub district_id: i32,
    pub ward_code: String,
    pub street: String,
    pub is_pickup: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::shop_offices::Model> for ShopOfficeDto {
    fn from(office: entity::shop_offices::Model) -> Self {
        Self {
            id: office.id,
            shop_id: office.shop_id,
            name: office.name,
            province_id: office.province_id,
            district_id: office.district_id,
            ward_code: office.ward_code,
            street: office.street,
            is_pickup: office.is_pickup,
            created_at: office.created_at,
            updated_at: office.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateShopOfficeDto {
    pub shop_id: i32,
    pub name: String,
    pub province_id: i32,
    pub district_id: i32,
    pub ward_code: String,
    pub street: String,
    #[serde(default)]
    pub is_pickup: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateShopOfficeDto {
    pub name: Option<String>,
    pub province_id: Option<i32>,
    pub district_id: Option<i32>,
    pub ward_code: Option<String>,
    pub street: Option<String>,
    pub is_pickup: Option<bool>,
}
