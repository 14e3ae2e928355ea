use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShopDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::shops::Model> for ShopDto {
    fn from(shop: entity::shops::Model) -> Self {
        Self {
            id: shop.id,
            owner_id: shop.owner_id,
            name: shop.name,
            phone: shop.phone,
            created_at: shop.created_at,
            updated_at: shop.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateShopDto {
    pub owner_id: i32,
    pub name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateShopDto {
    pub name: Option<String>,
    pub phone: Option<String>,
}
