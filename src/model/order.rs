use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub address_id: i32,
    pub status: String,
    pub total_amount: i64,
    pub currency_unit: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::orders::Model> for OrderDto {
    fn from(order: entity::orders::Model) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            address_id: order.address_id,
            status: order.status,
            total_amount: order.total_amount,
            currency_unit: order.currency_unit,
            note: order.note,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub currency_unit: String,
}

impl From<entity::order_items::Model> for OrderItemDto {
    fn from(item: entity::order_items::Model) -> Self {
        Self {
            id: item.id,
            variant_id: item.variant_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            currency_unit: item.currency_unit,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDetailDto {
    #[serde(flatten)]
    pub order: OrderDto,
    pub items: Vec<OrderItemDto>,
}

/// Checkout request: turns the caller's cart into an order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CheckoutDto {
    pub address_id: i32,
    pub note: Option<String>,
    /// Optional voucher code the caller has previously claimed.
    pub voucher_code: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub status: String,
}
