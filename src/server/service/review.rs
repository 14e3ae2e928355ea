use sea_orm::{ColumnTrait, DatabaseConnection};
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    model::review::ReviewDto,
    server::{
        data::media::{MediaOwner, MediaRepository},
        error::AppError,
        model::{
            page::Paginated,
            review::{CreateReviewParams, UpdateReviewParams},
        },
        service::crud::CrudService,
        storage::{rewrite_media, ObjectStorage},
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
    storage: Arc<dyn ObjectStorage>,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { db, storage }
    }

    fn crud(&self) -> CrudService<'a, entity::prelude::Reviews> {
        CrudService::new(self.db, "review")
    }

    /// Creates a review plus media rows for any already-uploaded
    /// attachment keys.
    pub async fn create(&self, params: CreateReviewParams) -> Result<ReviewDto, AppError> {
        if !(1..=5).contains(&params.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let media_keys = params.media_keys.clone();
        let review = self.crud().create(params).await?;

        let media_repo = MediaRepository::new(self.db);
        let mut media = Vec::with_capacity(media_keys.len());
        for key in media_keys {
            let row = media_repo
                .create(key, "image".to_string(), MediaOwner::Review(review.id))
                .await
                .map_err(|err| {
                    tracing::error!("Failed to attach review media: {}", err);
                    AppError::BadRequest("Could not attach review media".to_string())
                })?;
            media.push(row);
        }

        Ok(ReviewDto::from_model(
            review,
            rewrite_media(media, self.storage.as_ref()),
        ))
    }

    pub async fn get(&self, id: i32) -> Result<ReviewDto, AppError> {
        let review = self.crud().get(id).await?;

        let media_repo = MediaRepository::new(self.db);
        let media = media_repo.find_by_review(id).await?;

        Ok(ReviewDto::from_model(
            review,
            rewrite_media(media, self.storage.as_ref()),
        ))
    }

    /// Reviews, optionally scoped to one product, each carrying its media.
    pub async fn list(
        &self,
        product_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<ReviewDto>, AppError> {
        let reviews = match product_id {
            Some(product_id) => {
                self.crud()
                    .list_filtered(
                        entity::reviews::Column::ProductId.eq(product_id),
                        page,
                        per_page,
                    )
                    .await?
            }
            None => self.crud().list(page, per_page).await?,
        };

        let media_repo = MediaRepository::new(self.db);
        let review_ids: Vec<i32> = reviews.items.iter().map(|r| r.id).collect();
        let mut media_by_review: HashMap<i32, Vec<entity::media::Model>> = HashMap::new();

        for media in media_repo.find_by_reviews(review_ids).await? {
            if let Some(review_id) = media.review_id {
                media_by_review.entry(review_id).or_default().push(media);
            }
        }

        Ok(reviews.map(|review| {
            let media = media_by_review.remove(&review.id).unwrap_or_default();
            ReviewDto::from_model(review, rewrite_media(media, self.storage.as_ref()))
        }))
    }

    pub async fn update(&self, id: i32, params: UpdateReviewParams) -> Result<ReviewDto, AppError> {
        if let Some(rating) = params.dto.rating {
            if !(1..=5).contains(&rating) {
                return Err(AppError::BadRequest(
                    "Rating must be between 1 and 5".to_string(),
                ));
            }
        }

        self.crud().update(id, params).await?;
        self.get(id).await
    }

    /// Deletes the review; media rows cascade, stored objects are cleaned
    /// up best-effort afterwards.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let media_repo = MediaRepository::new(self.db);
        let storage_keys: Vec<String> = media_repo
            .find_by_review(id)
            .await?
            .into_iter()
            .map(|m| m.storage_key)
            .collect();

        self.crud().remove(id).await?;

        for key in &storage_keys {
            if let Err(err) = self.storage.delete(key).await {
                tracing::warn!("Orphaned storage object '{}': {}", key, err);
            }
        }

        Ok(())
    }

    /// Loads the raw review row for ownership checks.
    pub async fn get_model(&self, id: i32) -> Result<entity::reviews::Model, AppError> {
        self.crud().get(id).await
    }
}
