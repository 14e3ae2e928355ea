use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::review::{CreateReviewDto, UpdateReviewDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateReviewParams {
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub media_keys: Vec<String>,
}

impl CreateReviewParams {
    pub fn from_dto(user_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            user_id,
            product_id: dto.product_id,
            rating: dto.rating,
            comment: dto.comment,
            media_keys: dto.media_keys,
        }
    }
}

impl CreateParams<entity::prelude::Reviews> for CreateReviewParams {
    type ActiveModel = entity::reviews::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::reviews::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            product_id: ActiveValue::Set(self.product_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateReviewParams {
    pub dto: UpdateReviewDto,
}

impl UpdateReviewParams {
    pub fn from_dto(dto: UpdateReviewDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::Reviews> for UpdateReviewParams {
    type ActiveModel = entity::reviews::ActiveModel;

    fn apply(self, current: entity::reviews::Model) -> Self::ActiveModel {
        let mut model: entity::reviews::ActiveModel = current.into();

        if let Some(rating) = self.dto.rating {
            model.rating = ActiveValue::Set(rating);
        }
        if let Some(comment) = self.dto.comment {
            model.comment = ActiveValue::Set(Some(comment));
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
