//! Generic repository shared by every single-table resource.
//!
//! The original system repeated the same repository shape once per entity.
//! Here the shape exists once, parameterized by the entity type; per-entity
//! repositories remain only where an operation genuinely spans tables.

use sea_orm::{
    sea_query::SimpleExpr, ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QueryOrder,
};
use std::marker::PhantomData;

/// Per-entity configuration for the generic repository: which column is the
/// surrogate key. List reads are always ordered ascending by this column.
pub trait CrudEntity: EntityTrait {
    fn id_column() -> Self::Column;
}

pub struct CrudRepository<'a, E: CrudEntity> {
    db: &'a DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<'a, E> CrudRepository<'a, E>
where
    E: CrudEntity,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Inserts one record and returns the persisted row (generated id and
    /// any column defaults included).
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    /// Fetches one page ordered by ascending id.
    ///
    /// # Arguments
    /// - `page`: 1-based page number
    /// - `per_page`: page size, must be > 0
    ///
    /// # Returns
    /// - `Ok((rows, total))`: the page window and the total row count
    pub async fn find_page(&self, page: u64, per_page: u64) -> Result<(Vec<E::Model>, u64), DbErr>
    where
        E::Model: Send + Sync,
    {
        let paginator = E::find()
            .order_by_asc(E::id_column())
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page - 1).await?;

        Ok((rows, total))
    }

    /// Same as `find_page` restricted by a filter condition.
    pub async fn find_page_filtered(
        &self,
        condition: SimpleExpr,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<E::Model>, u64), DbErr>
    where
        E::Model: Send + Sync,
    {
        let paginator = E::find()
            .filter(condition)
            .order_by_asc(E::id_column())
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page - 1).await?;

        Ok((rows, total))
    }

    /// Fetches all rows matching a condition, ordered by ascending id.
    pub async fn find_filtered(&self, condition: SimpleExpr) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .filter(condition)
            .order_by_asc(E::id_column())
            .all(self.db)
            .await
    }

    /// Applies a partial update built from a fetched row.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(self.db).await
    }

    /// Deletes by id.
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: 0 when the id did not exist
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }
}

impl CrudEntity for entity::prelude::Addresses {
    fn id_column() -> Self::Column {
        entity::addresses::Column::Id
    }
}

impl CrudEntity for entity::prelude::CartItems {
    fn id_column() -> Self::Column {
        entity::cart_items::Column::Id
    }
}

impl CrudEntity for entity::prelude::Carts {
    fn id_column() -> Self::Column {
        entity::carts::Column::Id
    }
}

impl CrudEntity for entity::prelude::Categories {
    fn id_column() -> Self::Column {
        entity::categories::Column::Id
    }
}

impl CrudEntity for entity::prelude::Colors {
    fn id_column() -> Self::Column {
        entity::colors::Column::Id
    }
}

impl CrudEntity for entity::prelude::Media {
    fn id_column() -> Self::Column {
        entity::media::Column::Id
    }
}

impl CrudEntity for entity::prelude::OrderItems {
    fn id_column() -> Self::Column {
        entity::order_items::Column::Id
    }
}

impl CrudEntity for entity::prelude::Orders {
    fn id_column() -> Self::Column {
        entity::orders::Column::Id
    }
}

impl CrudEntity for entity::prelude::ProductVariants {
    fn id_column() -> Self::Column {
        entity::product_variants::Column::Id
    }
}

impl CrudEntity for entity::prelude::Products {
    fn id_column() -> Self::Column {
        entity::products::Column::Id
    }
}

impl CrudEntity for entity::prelude::ReturnRequests {
    fn id_column() -> Self::Column {
        entity::return_requests::Column::Id
    }
}

impl CrudEntity for entity::prelude::Reviews {
    fn id_column() -> Self::Column {
        entity::reviews::Column::Id
    }
}

impl CrudEntity for entity::prelude::Shipments {
    fn id_column() -> Self::Column {
        entity::shipments::Column::Id
    }
}

impl CrudEntity for entity::prelude::ShopOffices {
    fn id_column() -> Self::Column {
        entity::shop_offices::Column::Id
    }
}

impl CrudEntity for entity::prelude::Shops {
    fn id_column() -> Self::Column {
        entity::shops::Column::Id
    }
}

impl CrudEntity for entity::prelude::SizeProfiles {
    fn id_column() -> Self::Column {
        entity::size_profiles::Column::Id
    }
}

impl CrudEntity for entity::prelude::UserVouchers {
    fn id_column() -> Self::Column {
        entity::user_vouchers::Column::Id
    }
}

impl CrudEntity for entity::prelude::Users {
    fn id_column() -> Self::Column {
        entity::users::Column::Id
    }
}

impl CrudEntity for entity::prelude::Vouchers {
    fn id_column() -> Self::Column {
        entity::vouchers::Column::Id
    }
}
