use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::catalog::{CreateCategoryDto, CreateColorDto, UpdateCategoryDto, UpdateColorDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

impl CreateParams<entity::prelude::Categories> for CreateCategoryParams {
    type ActiveModel = entity::categories::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::categories::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateCategoryParams {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

impl UpdateParams<entity::prelude::Categories> for UpdateCategoryParams {
    type ActiveModel = entity::categories::ActiveModel;

    fn apply(self, current: entity::categories::Model) -> Self::ActiveModel {
        let mut model: entity::categories::ActiveModel = current.into();

        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = self.description {
            model.description = ActiveValue::Set(Some(description));
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}

pub struct CreateColorParams {
    pub name: String,
    pub hex_code: Option<String>,
}

impl CreateColorParams {
    pub fn from_dto(dto: CreateColorDto) -> Self {
        Self {
            name: dto.name,
            hex_code: dto.hex_code,
        }
    }
}

impl CreateParams<entity::prelude::Colors> for CreateColorParams {
    type ActiveModel = entity::colors::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        entity::colors::ActiveModel {
            name: ActiveValue::Set(self.name),
            hex_code: ActiveValue::Set(self.hex_code),
            ..Default::default()
        }
    }
}

pub struct UpdateColorParams {
    pub name: Option<String>,
    pub hex_code: Option<String>,
}

impl UpdateColorParams {
    pub fn from_dto(dto: UpdateColorDto) -> Self {
        Self {
            name: dto.name,
            hex_code: dto.hex_code,
        }
    }
}

impl UpdateParams<entity::prelude::Colors> for UpdateColorParams {
    type ActiveModel = entity::colors::ActiveModel;

    fn apply(self, current: entity::colors::Model) -> Self::ActiveModel {
        let mut model: entity::colors::ActiveModel = current.into();

        if let Some(name) = self.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(hex_code) = self.hex_code {
            model.hex_code = ActiveValue::Set(Some(hex_code));
        }

        model
    }
}
