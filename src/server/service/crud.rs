//! Generic CRUD service: the one place that implements the
//! create / list / get / update / remove contract shared by every
//! single-table resource.
//!
//! Error classification happens here and nowhere else: persistence failures
//! on writes become `BadRequest` (original cause logged, never surfaced),
//! absent ids become `NotFound`, list reads never fail on an empty store.

use sea_orm::{
    sea_query::SimpleExpr, ActiveModelBehavior, ActiveModelTrait, DatabaseConnection,
    IntoActiveModel, PrimaryKeyTrait,
};

use crate::server::{
    data::crud::{CrudEntity, CrudRepository},
    error::AppError,
    model::page::{clamp_page, Paginated},
};

/// Builds the insert model for a `create` call.
pub trait CreateParams<E: CrudEntity> {
    type ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send;

    fn into_active_model(self) -> Self::ActiveModel;
}

/// Applies a partial update on top of the currently persisted row. Only
/// fields carried by the params change; everything else must be copied
/// through unchanged.
pub trait UpdateParams<E: CrudEntity> {
    type ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send;

    fn apply(self, current: E::Model) -> Self::ActiveModel;
}

pub struct CrudService<'a, E: CrudEntity> {
    repo: CrudRepository<'a, E>,
    /// Resource name used in log lines and client-facing messages.
    resource: &'static str,
}

impl<'a, E> CrudService<'a, E>
where
    E: CrudEntity,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: &'a DatabaseConnection, resource: &'static str) -> Self {
        Self {
            repo: CrudRepository::new(db),
            resource,
        }
    }

    /// Inserts one record.
    ///
    /// Any persistence error (constraint violation, connection failure) is
    /// logged and collapsed into a generic `BadRequest`.
    pub async fn create<P>(&self, params: P) -> Result<E::Model, AppError>
    where
        P: CreateParams<E>,
        E::Model: IntoActiveModel<P::ActiveModel>,
    {
        match self.repo.insert(params.into_active_model()).await {
            Ok(model) => {
                tracing::info!("Created {}", self.resource);
                Ok(model)
            }
            Err(err) => {
                tracing::error!("Failed to create {}: {}", self.resource, err);
                Err(AppError::BadRequest(format!(
                    "Could not create {}",
                    self.resource
                )))
            }
        }
    }

    pub async fn get(&self, id: i32) -> Result<E::Model, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", self.resource, id)))
    }

    /// Returns one page ordered by ascending id. An empty store yields an
    /// empty page, never an error.
    pub async fn list(&self, page: u64, per_page: u64) -> Result<Paginated<E::Model>, AppError>
    where
        E::Model: Send + Sync,
    {
        let (page, per_page) = clamp_page(page, per_page);
        let (items, total) = self.repo.find_page(page, per_page).await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    /// `list` restricted by a filter condition (e.g. owner scoping).
    pub async fn list_filtered(
        &self,
        condition: SimpleExpr,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<E::Model>, AppError>
    where
        E::Model: Send + Sync,
    {
        let (page, per_page) = clamp_page(page, per_page);
        let (items, total) = self
            .repo
            .find_page_filtered(condition, page, per_page)
            .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    /// Applies only the fields carried by `params`; everything else keeps
    /// its persisted value.
    pub async fn update<P>(&self, id: i32, params: P) -> Result<E::Model, AppError>
    where
        P: UpdateParams<E>,
        E::Model: IntoActiveModel<P::ActiveModel>,
    {
        let current = self.get(id).await?;

        match self.repo.update(params.apply(current)).await {
            Ok(model) => {
                tracing::info!("Updated {} {}", self.resource, id);
                Ok(model)
            }
            Err(err) => {
                tracing::error!("Failed to update {} {}: {}", self.resource, id, err);
                Err(AppError::BadRequest(format!(
                    "Could not update {}",
                    self.resource
                )))
            }
        }
    }

    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let affected = self.repo.delete_by_id(id).await?;

        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "{} {} not found",
                self.resource, id
            )));
        }

        tracing::info!("Deleted {} {}", self.resource, id);
        Ok(())
    }
}
