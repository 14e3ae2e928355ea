use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a product together with its variants, variants ordered by id.
    pub async fn get_with_variants(
        &self,
        id: i32,
    ) -> Result<Option<(entity::products::Model, Vec<entity::product_variants::Model>)>, DbErr>
    {
        let Some(product) = entity::prelude::Products::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let variants = product
            .find_related(entity::prelude::ProductVariants)
            .order_by_asc(entity::product_variants::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((product, variants)))
    }

    /// Deletes a product and every dependent row in one transaction.
    ///
    /// Variant media and review media rows are removed explicitly so their
    /// storage keys can be collected first; the keys are returned for the
    /// caller to delete from object storage after the transaction has
    /// committed. Rolls back entirely if any statement fails.
    ///
    /// # Returns
    /// - `Ok(Some(keys))`: product deleted, storage keys to clean up
    /// - `Ok(None)`: product did not exist
    pub async fn delete_deep(&self, id: i32) -> Result<Option<Vec<String>>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(product) = entity::prelude::Products::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let variant_ids: Vec<i32> = entity::prelude::ProductVariants::find()
            .filter(entity::product_variants::Column::ProductId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|v| v.id)
            .collect();

        let review_ids: Vec<i32> = entity::prelude::Reviews::find()
            .filter(entity::reviews::Column::ProductId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();

        let has_owners = !variant_ids.is_empty() || !review_ids.is_empty();
        let mut media_owned = Condition::any();
        if !variant_ids.is_empty() {
            media_owned =
                media_owned.add(entity::media::Column::VariantId.is_in(variant_ids.clone()));
        }
        if !review_ids.is_empty() {
            media_owned = media_owned.add(entity::media::Column::ReviewId.is_in(review_ids));
        }

        let media = if has_owners {
            entity::prelude::Media::find()
                .filter(media_owned.clone())
                .all(&txn)
                .await?
        } else {
            Vec::new()
        };

        let storage_keys: Vec<String> = media.iter().map(|m| m.storage_key.clone()).collect();

        if !media.is_empty() {
            entity::prelude::Media::delete_many()
                .filter(media_owned)
                .exec(&txn)
                .await?;
        }

        if !variant_ids.is_empty() {
            entity::prelude::ProductVariants::delete_many()
                .filter(entity::product_variants::Column::ProductId.eq(id))
                .exec(&txn)
                .await?;
        }

        product.delete(&txn).await?;

        txn.commit().await?;

        Ok(Some(storage_keys))
    }
}
