use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::shop::{CreateShopDto, UpdateShopDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateShopParams {
    pub dto: CreateShopDto,
}

impl CreateShopParams {
    pub fn from_dto(dto: CreateShopDto) -> Self {
        Self { dto }
    }
}

impl CreateParams<entity::prelude::Shops> for CreateShopParams {
    type ActiveModel = entity::shops::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::shops::ActiveModel {
            owner_id: ActiveValue::Set(self.dto.owner_id),
            name: ActiveValue::Set(self.dto.name),
            phone: ActiveValue::Set(self.dto.phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateShopParams {
    pub dto: UpdateShopDto,
}

impl UpdateShopParams {
    pub fn from_dto(dto: UpdateShopDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::Shops> for UpdateShopParams {
    type ActiveModel = entity::shops::ActiveModel;

    fn apply(self, current: entity::shops::Model) -> Self::ActiveModel {
        let mut model: entity::shops::ActiveModel = current.into();

        if let Some(name) = self.dto.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = self.dto.phone {
            model.phone = ActiveValue::Set(phone);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
