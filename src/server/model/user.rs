use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::user::UpdateUserDto,
    server::service::crud::UpdateParams,
};

/// Admin-side partial update. Email and password are managed exclusively
/// through the auth flows.
pub struct UpdateUserParams {
    pub dto: UpdateUserDto,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::Users> for UpdateUserParams {
    type ActiveModel = entity::users::ActiveModel;

    fn apply(self, current: entity::users::Model) -> Self::ActiveModel {
        let mut model: entity::users::ActiveModel = current.into();

        if let Some(full_name) = self.dto.full_name {
            model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(phone) = self.dto.phone {
            model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(role) = self.dto.role {
            model.role = ActiveValue::Set(role);
        }
        if let Some(active) = self.dto.active {
            model.active = ActiveValue::Set(active);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
