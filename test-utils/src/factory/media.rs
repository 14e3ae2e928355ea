use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MediaFactory<'a> {
    db: &'a DatabaseConnection,
    storage_key: String,
    kind: String,
    variant_id: Option<i32>,
    review_id: Option<i32>,
    user_id: Option<i32>,
}

impl<'a> MediaFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            storage_key: format!("media/test-{id}.jpg"),
            kind: "image".to_string(),
            variant_id: None,
            review_id: None,
            user_id: None,
        }
    }

    pub fn storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn variant(mut self, variant_id: i32) -> Self {
        self.variant_id = Some(variant_id);
        self
    }

    pub fn review(mut self, review_id: i32) -> Self {
        self.review_id = Some(review_id);
        self
    }

    pub fn user(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub async fn build(self) -> Result<entity::media::Model, DbErr> {
        entity::media::ActiveModel {
            id: ActiveValue::NotSet,
            storage_key: ActiveValue::Set(self.storage_key),
            kind: ActiveValue::Set(self.kind),
            variant_id: ActiveValue::Set(self.variant_id),
            review_id: ActiveValue::Set(self.review_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image attachment for a product variant.
pub async fn create_variant_media(
    db: &DatabaseConnection,
    variant_id: i32,
) -> Result<entity::media::Model, DbErr> {
    MediaFactory::new(db).variant(variant_id).build().await
}
