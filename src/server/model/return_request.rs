use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::return_request::{CreateReturnRequestDto, UpdateReturnRequestDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateReturnRequestParams {
    pub user_id: i32,
    pub dto: CreateReturnRequestDto,
}

impl CreateReturnRequestParams {
    pub fn from_dto(user_id: i32, dto: CreateReturnRequestDto) -> Self {
        Self { user_id, dto }
    }
}

impl CreateParams<entity::prelude::ReturnRequests> for CreateReturnRequestParams {
    type ActiveModel = entity::return_requests::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::return_requests::ActiveModel {
            order_item_id: ActiveValue::Set(self.dto.order_item_id),
            user_id: ActiveValue::Set(self.user_id),
            reason: ActiveValue::Set(self.dto.reason),
            status: ActiveValue::Set("REQUESTED".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateReturnRequestParams {
    pub status: String,
}

impl UpdateReturnRequestParams {
    pub fn from_dto(dto: UpdateReturnRequestDto) -> Self {
        Self { status: dto.status }
    }
}

impl UpdateParams<entity::prelude::ReturnRequests> for UpdateReturnRequestParams {
    type ActiveModel = entity::return_requests::ActiveModel;

    fn apply(self, current: entity::return_requests::Model) -> Self::ActiveModel {
        let mut model: entity::return_requests::ActiveModel = current.into();

        model.status = ActiveValue::Set(self.status);
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
