use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::shop_office::{CreateShopOfficeDto, UpdateShopOfficeDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateShopOfficeParams {
    pub dto: CreateShopOfficeDto,
}

impl CreateShopOfficeParams {
    pub fn from_dto(dto: CreateShopOfficeDto) -> Self {
        Self { dto }
    }
}

impl CreateParams<entity::prelude::ShopOffices> for CreateShopOfficeParams {
    type ActiveModel = entity::shop_offices::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::shop_offices::ActiveModel {
            shop_id: ActiveValue::Set(self.dto.shop_id),
            name: ActiveValue::Set(self.dto.name),
            province_id: ActiveValue::Set(self.dto.province_id),
            district_id: ActiveValue::Set(self.dto.district_id),
            ward_code: ActiveValue::Set(self.dto.ward_code),
            street: ActiveValue::Set(self.dto.street),
            is_pickup: ActiveValue::Set(self.dto.is_pickup),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateShopOfficeParams {
    pub dto: UpdateShopOfficeDto,
}

impl UpdateShopOfficeParams {
    pub fn from_dto(dto: UpdateShopOfficeDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::ShopOffices> for UpdateShopOfficeParams {
    type ActiveModel = entity::shop_offices::ActiveModel;

    fn apply(self, current: entity::shop_offices::Model) -> Self::ActiveModel {
        let mut model: entity::shop_offices::ActiveModel = current.into();

        if let Some(name) = self.dto.name {
            model.name = ActiveValue::Set(name);
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
        if let Some(is_pickup) = self.dto.is_pickup {
            model.is_pickup = ActiveValue::Set(is_pickup);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
