use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShipmentDto {
    pub id: i32,
    pub order_id: i32,
    pub shop_id: i32,
    pub carrier_code: Option<String>,
    pub service_id: Option<i32>,
    pub fee_amount: i64,
    pub currency_unit: String,
    pub status: String,
    pub expected_delivery: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::shipments::Model> for ShipmentDto {
    fn from(shipment: entity::shipments::Model) -> Self {
        Self {
            id: shipment.id,
            order_id: shipment.order_id,
            shop_id: shipment.shop_id,
            carrier_code: shipment.carrier_code,
            service_id: shipment.service_id,
            fee_amount: shipment.fee_amount,
            currency_unit: shipment.currency_unit,
            status: shipment.status,
            expected_delivery: shipment.expected_delivery,
            created_at: shipment.created_at,
            updated_at: shipment.updated_at,
        }
    }
}

/// Request to build and dispatch carrier packages for an order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DispatchOrderDto {
    pub order_id: i32,
}

/// Per-shop package preview: fee and expected delivery without creating
/// a carrier order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PackagePreviewDto {
    pub shop_id: i32,
    pub from_office_id: i32,
    pub weight_grams: i32,
    pub fee_amount: i64,
    pub expected_delivery: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrackShipmentDto {
    pub order_code: String,
    pub status: String,
    pub updated_at: Option<DateTime<Utc>>,
}
