use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::size_profile::{CreateSizeProfileDto, UpdateSizeProfileDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateSizeProfileParams {
    pub user_id: i32,
    pub dto: CreateSizeProfileDto,
}

impl CreateSizeProfileParams {
    pub fn from_dto(user_id: i32, dto: CreateSizeProfileDto) -> Self {
        Self { user_id, dto }
    }
}

impl CreateParams<entity::prelude::SizeProfiles> for CreateSizeProfileParams {
    type ActiveModel = entity::size_profiles::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::size_profiles::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            height_cm: ActiveValue::Set(self.dto.height_cm),
            weight_kg: ActiveValue::Set(self.dto.weight_kg),
            foot_length_mm: ActiveValue::Set(self.dto.foot_length_mm),
            notes: ActiveValue::Set(self.dto.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateSizeProfileParams {
    pub dto: UpdateSizeProfileDto,
}

impl UpdateSizeProfileParams {
    pub fn from_dto(dto: UpdateSizeProfileDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::SizeProfiles> for UpdateSizeProfileParams {
    type ActiveModel = entity::size_profiles::ActiveModel;

    fn apply(self, current: entity::size_profiles::Model) -> Self::ActiveModel {
        let mut model: entity::size_profiles::ActiveModel = current.into();

        if let Some(height_cm) = self.dto.height_cm {
            model.height_cm = ActiveValue::Set(height_cm);
        }
        if let Some(weight_kg) = self.dto.weight_kg {
            model.weight_kg = ActiveValue::Set(weight_kg);
        }
        if let Some(foot_length_mm) = self.dto.foot_length_mm {
            model.foot_length_mm = ActiveValue::Set(Some(foot_length_mm));
        }
        if let Some(notes) = self.dto.notes {
            model.notes = ActiveValue::Set(Some(notes));
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
