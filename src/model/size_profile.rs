use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SizeProfileDto {
    pub id: i32,
    pub user_id: i32,
    pub height_cm: i32,
    pub weight_kg: i32,
    pub foot_length_mm: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::size_profiles::Model> for SizeProfileDto {
    fn from(profile: entity::size_profiles::Model) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            foot_length_mm: profile.foot_length_mm,
            notes: profile.notes,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSizeProfileDto {
    pub height_cm: i32,
    pub weight_kg: i32,
    pub foot_length_mm: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateSizeProfileDto {
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub foot_length_mm: Option<i32>,
    pub notes: Option<String>,
}
