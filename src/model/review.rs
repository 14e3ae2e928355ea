use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::media::MediaDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReviewDto {
    pub fn from_model(review: entity::reviews::Model, media: Vec<MediaDto>) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            product_id: review.product_id,
            rating: review.rating,
            comment: review.comment,
            media,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl From<entity::reviews::Model> for ReviewDto {
    fn from(review: entity::reviews::Model) -> Self {
        ReviewDto::from_model(review, Vec::new())
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReviewDto {
    pub product_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    /// Storage keys of already-uploaded attachments.
    #[serde(default)]
    pub media_keys: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateReviewDto {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}
