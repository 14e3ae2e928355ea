use chrono::Utc;
use sea_orm::{ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    carrier::CarrierClient,
    data::{crud::CrudRepository, order::OrderRepository},
    service::shipment::ShipmentService,
};

mod list;

/// Carrier client pointed at a dead address; fine for flows that never
/// leave the database.
fn offline_carrier() -> CarrierClient {
    CarrierClient::new(
        reqwest::Client::new(),
        url::Url::parse("http://127.0.0.1:1/").unwrap(),
        "test-token".to_string(),
        0,
    )
}
