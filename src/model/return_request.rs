use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReturnRequestDto {
    pub id: i32,
    pub order_item_id: i32,
    pub user_id: i32,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::return_requests::Model> for ReturnRequestDto {
    fn from(request: entity::return_requests::Model) -> Self {
        Self {
            id: request.id,
            order_item_id: request.order_item_id,
            user_id: request.user_id,
            reason: request.reason,
            status: request.status,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReturnRequestDto {
    pub order_item_id: i32,
    pub reason: String,
}

/// Admin decision on a return request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateReturnRequestDto {
    pub status: String,
}
