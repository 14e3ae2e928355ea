use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::voucher::{CreateVoucherDto, UpdateVoucherDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateVoucherParams {
    pub dto: CreateVoucherDto,
}

impl CreateVoucherParams {
    pub fn from_dto(dto: CreateVoucherDto) -> Self {
        Self { dto }
    }
}

impl CreateParams<entity::prelude::Vouchers> for CreateVoucherParams {
    type ActiveModel = entity::vouchers::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::vouchers::ActiveModel {
            code: ActiveValue::Set(self.dto.code),
            description: ActiveValue::Set(self.dto.description),
            discount_amount: ActiveValue::Set(self.dto.discount_amount),
            currency_unit: ActiveValue::Set(self.dto.currency_unit),
            starts_at: ActiveValue::Set(self.dto.starts_at),
            expires_at: ActiveValue::Set(self.dto.expires_at),
            usage_limit: ActiveValue::Set(self.dto.usage_limit),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateVoucherParams {
    pub dto: UpdateVoucherDto,
}

impl UpdateVoucherParams {
    pub fn from_dto(dto: UpdateVoucherDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::Vouchers> for UpdateVoucherParams {
    type ActiveModel = entity::vouchers::ActiveModel;

    fn apply(self, current: entity::vouchers::Model) -> Self::ActiveModel {
        let mut model: entity::vouchers::ActiveModel = current.into();

        if let Some(description) = self.dto.description {
            model.description = ActiveValue::Set(Some(description));
        }
        if let Some(discount_amount) = self.dto.discount_amount {
            model.discount_amount = ActiveValue::Set(discount_amount);
        }
        if let Some(starts_at) = self.dto.starts_at {
            model.starts_at = ActiveValue::Set(starts_at);
        }
        if let Some(expires_at) = self.dto.expires_at {
            model.expires_at = ActiveValue::Set(expires_at);
        }
        if let Some(usage_limit) = self.dto.usage_limit {
            model.usage_limit = ActiveValue::Set(usage_limit);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
