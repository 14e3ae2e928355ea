use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use super::CarrierError;

/// Every carrier response arrives wrapped in this envelope; `code` 200
/// signals success regardless of the HTTP status.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    code: i64,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Province {
    pub province_id: i32,
    pub province_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct District {
    pub district_id: i32,
    pub province_id: i32,
    pub district_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Ward {
    pub ward_code: String,
    pub district_id: i32,
    pub ward_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeeRequest {
    pub from_district_id: i32,
    pub to_district_id: i32,
    pub to_ward_code: String,
    /// Grams.
    pub weight: i32,
    /// Millimeters.
    pub length: i32,
    pub width: i32,
    pub height: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeeResponse {
    pub total: i64,
    #[serde(default)]
    pub service_fee: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderItem {
    pub name: String,
    pub quantity: i32,
    pub weight: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub from_district_id: i32,
    pub from_ward_code: String,
    pub to_district_id: i32,
    pub to_ward_code: String,
    pub to_name: String,
    pub to_phone: String,
    pub to_address: String,
    pub weight: i32,
    pub length: i32,
    pub width: i32,
    pub height: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i32>,
    pub items: Vec<CreateOrderItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
    pub order_code: String,
    pub total_fee: i64,
    #[serde(default)]
    pub expected_delivery_time: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackResponse {
    pub order_code: String,
    pub status: String,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Serialize)]
struct OrderCodeBody<'a> {
    order_code: &'a str,
}

/// Typed wrapper over the carrier's HTTP API. One method per endpoint the
/// system consumes; no retry or backoff anywhere.
#[derive(Clone)]
pub struct CarrierClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
    shop_id: i64,
}

impl CarrierClient {
    pub fn new(http: reqwest::Client, base_url: Url, token: String, shop_id: i64) -> Self {
        Self {
            http,
            base_url,
            token,
            shop_id,
        }
    }

    pub async fn provinces(&self) -> Result<Vec<Province>, CarrierError> {
        self.get("master-data/province").await
    }

    pub async fn districts(&self, province_id: i32) -> Result<Vec<District>, CarrierError> {
        self.post(
            "master-data/district",
            &serde_json::json!({ "province_id": province_id }),
        )
        .await
    }

    pub async fn wards(&self, district_id: i32) -> Result<Vec<Ward>, CarrierError> {
        self.post(
            "master-data/ward",
            &serde_json::json!({ "district_id": district_id }),
        )
        .await
    }

    pub async fn calculate_fee(&self, request: &FeeRequest) -> Result<FeeResponse, CarrierError> {
        self.post("v2/shipping-order/fee", request).await
    }

    pub async fn preview_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, CarrierError> {
        self.post("v2/shipping-order/preview", request).await
    }

    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, CarrierError> {
        self.post("v2/shipping-order/create", request).await
    }

    pub async fn cancel_order(&self, order_code: &str) -> Result<(), CarrierError> {
        let _: serde_json::Value = self
            .post("v2/switch-status/cancel", &OrderCodeBody { order_code })
            .await?;
        Ok(())
    }

    pub async fn track_order(&self, order_code: &str) -> Result<TrackResponse, CarrierError> {
        self.post("v2/shipping-order/detail", &OrderCodeBody { order_code })
            .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, CarrierError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .header("Token", &self.token)
            .send()
            .await?;

        Self::unwrap_envelope(response.json::<ApiEnvelope<T>>().await?, path)
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &'static str,
        body: &B,
    ) -> Result<T, CarrierError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .header("Token", &self.token)
            .header("ShopId", self.shop_id)
            .json(body)
            .send()
            .await?;

        Self::unwrap_envelope(response.json::<ApiEnvelope<T>>().await?, path)
    }

    fn endpoint(&self, path: &str) -> Url {
        // Base URL is validated at startup; joining a static path cannot
        // produce an invalid URL.
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    fn unwrap_envelope<T>(
        envelope: ApiEnvelope<T>,
        operation: &'static str,
    ) -> Result<T, CarrierError> {
        if envelope.code != 200 {
            return Err(CarrierError::Rejected {
                code: envelope.code,
                message: envelope.message,
            });
        }

        envelope
            .data
            .ok_or(CarrierError::EmptyPayload(operation))
    }
}
