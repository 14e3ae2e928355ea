use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CartRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's cart, creating it on first access.
    pub async fn find_or_create(&self, user_id: i32) -> Result<entity::carts::Model, DbErr> {
        let existing = entity::prelude::Carts::find()
            .filter(entity::carts::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        if let Some(cart) = existing {
            return Ok(cart);
        }

        let now = Utc::now();
        entity::carts::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Cart lines joined with their variants, ordered by line id.
    pub async fn items_with_variants(
        &self,
        cart_id: i32,
    ) -> Result<
        Vec<(
            entity::cart_items::Model,
            Option<entity::product_variants::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::CartItems::find()
            .filter(entity::cart_items::Column::CartId.eq(cart_id))
            .order_by_asc(entity::cart_items::Column::Id)
            .find_also_related(entity::prelude::ProductVariants)
            .all(self.db)
            .await
    }

    /// Adds a line to the cart, merging quantity when the variant is
    /// already present.
    pub async fn add_item(
        &self,
        cart_id: i32,
        variant_id: i32,
        quantity: i32,
    ) -> Result<entity::cart_items::Model, DbErr> {
        let existing = entity::prelude::CartItems::find()
            .filter(entity::cart_items::Column::CartId.eq(cart_id))
            .filter(entity::cart_items::Column::VariantId.eq(variant_id))
            .one(self.db)
            .await?;

        let now = Utc::now();

        if let Some(item) = existing {
            let merged = item.quantity + quantity;
            let mut model: entity::cart_items::ActiveModel = item.into();
            model.quantity = ActiveValue::Set(merged);
            model.updated_at = ActiveValue::Set(now);
            return model.update(self.db).await;
        }

        entity::cart_items::ActiveModel {
            cart_id: ActiveValue::Set(cart_id),
            variant_id: ActiveValue::Set(variant_id),
            quantity: ActiveValue::Set(quantity),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_item(
        &self,
        item_id: i32,
    ) -> Result<Option<entity::cart_items::Model>, DbErr> {
        entity::prelude::CartItems::find_by_id(item_id)
            .one(self.db)
            .await
    }

    pub async fn set_item_quantity(
        &self,
        item: entity::cart_items::Model,
        quantity: i32,
    ) -> Result<entity::cart_items::Model, DbErr> {
        let mut model: entity::cart_items::ActiveModel = item.into();
        model.quantity = ActiveValue::Set(quantity);
        model.updated_at = ActiveValue::Set(Utc::now());
        model.update(self.db).await
    }

    pub async fn remove_item(&self, item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItems::delete_by_id(item_id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Empties the cart, returning the number of removed lines.
    pub async fn clear(&self, cart_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItems::delete_many()
            .filter(entity::cart_items::Column::CartId.eq(cart_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
