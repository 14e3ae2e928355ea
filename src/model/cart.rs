use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CartDto {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<CartItemDto>,
}

/// Cart line with the variant's current price; prices are only snapshotted
/// at checkout.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CartItemDto {
    pub id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub currency_unit: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddCartItemDto {
    pub variant_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCartItemDto {
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}
