use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Which record a media attachment hangs off.
pub enum MediaOwner {
    Variant(i32),
    Review(i32),
    User(i32),
}

pub struct MediaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        storage_key: String,
        kind: String,
        owner: MediaOwner,
    ) -> Result<entity::media::Model, DbErr> {
        let (variant_id, review_id, user_id) = match owner {
            MediaOwner::Variant(id) => (Some(id), None, None),
            MediaOwner::Review(id) => (None, Some(id), None),
            MediaOwner::User(id) => (None, None, Some(id)),
        };

        entity::media::ActiveModel {
            storage_key: ActiveValue::Set(storage_key),
            kind: ActiveValue::Set(kind),
            variant_id: ActiveValue::Set(variant_id),
            review_id: ActiveValue::Set(review_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_variant(&self, variant_id: i32) -> Result<Vec<entity::media::Model>, DbErr> {
        entity::prelude::Media::find()
            .filter(entity::media::Column::VariantId.eq(variant_id))
            .order_by_asc(entity::media::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_variants(
        &self,
        variant_ids: Vec<i32>,
    ) -> Result<Vec<entity::media::Model>, DbErr> {
        if variant_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Media::find()
            .filter(entity::media::Column::VariantId.is_in(variant_ids))
            .order_by_asc(entity::media::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_review(&self, review_id: i32) -> Result<Vec<entity::media::Model>, DbErr> {
        entity::prelude::Media::find()
            .filter(entity::media::Column::ReviewId.eq(review_id))
            .order_by_asc(entity::media::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_reviews(
        &self,
        review_ids: Vec<i32>,
    ) -> Result<Vec<entity::media::Model>, DbErr> {
        if review_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Media::find()
            .filter(entity::media::Column::ReviewId.is_in(review_ids))
            .order_by_asc(entity::media::Column::Id)
            .all(self.db)
            .await
    }
}
