use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::address::{CreateAddressDto, UpdateAddressDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateAddressParams {
    pub user_id: i32,
    pub dto: CreateAddressDto,
}

impl CreateAddressParams {
    /// The owning user always comes from the bearer token, never the body.
    pub fn from_dto(user_id: i32, dto: CreateAddressDto) -> Self {
        Self { user_id, dto }
    }
}

impl CreateParams<entity::prelude::Addresses> for CreateAddressParams {
    type ActiveModel = entity::addresses::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::addresses::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            receiver_name: ActiveValue::Set(self.dto.receiver_name),
            phone: ActiveValue::Set(self.dto.phone),
            province_id: ActiveValue::Set(self.dto.province_id),
            district_id: ActiveValue::Set(self.dto.district_id),
            ward_code: ActiveValue::Set(self.dto.ward_code),
            street: ActiveValue::Set(self.dto.street),
            is_default: ActiveValue::Set(self.dto.is_default),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateAddressParams {
    pub dto: UpdateAddressDto,
}

impl UpdateAddressParams {
    pub fn from_dto(dto: UpdateAddressDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::Addresses> for UpdateAddressParams {
    type ActiveModel = entity::addresses::ActiveModel;

    fn apply(self, current: entity::addresses::Model) -> Self::ActiveModel {
        let mut model: entity::addresses::ActiveModel = current.into();

        if let Some(receiver_name) = self.dto.receiver_name {
            model.receiver_name = ActiveValue::Set(receiver_name);
        }
        if let Some(phone) = self.dto.phone {
            model.phone = ActiveValue::Set(phone);
        }
        if let Some(province_id) = self.dto.province_id {
            model.province_id = ActiveValue::Set(province_id);
        }
        if let Some(district_id) = self.dto.district_id {
            model.district_id = ActiveValue::Set(district_id);
        }
        if let Some(ward_code) = self.dto.ward_code {
            model.ward_code = ActiveValue::Set(ward_code);
        }
        if let Some(street) = self.dto.street {
            model.street = ActiveValue::Set(street);
        }
        if let Some(is_default) = self.dto.is_default {
            model.is_default = ActiveValue::Set(is_default);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
