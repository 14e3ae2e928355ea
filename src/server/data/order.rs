use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

/// One checkout line, price already snapshotted from the variant.
pub struct CheckoutLine {
    pub variant_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub currency_unit: String,
}

pub struct CheckoutParams {
    pub user_id: i32,
    pub address_id: i32,
    pub note: Option<String>,
    pub currency_unit: String,
    pub total_amount: i64,
    pub lines: Vec<CheckoutLine>,
    pub cart_id: i32,
    /// Claim row to mark used inside the same transaction, if a voucher
    /// was applied.
    pub user_voucher_id: Option<i32>,
}

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the order, its lines, decrements stock, marks the voucher
    /// claim used and empties the cart, all in one transaction. Any failure
    /// rolls the whole checkout back.
    pub async fn create_from_cart(
        &self,
        params: CheckoutParams,
    ) -> Result<entity::orders::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let order = entity::orders::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            address_id: ActiveValue::Set(params.address_id),
            status: ActiveValue::Set("PENDING".to_string()),
            total_amount: ActiveValue::Set(params.total_amount),
            currency_unit: ActiveValue::Set(params.currency_unit),
            note: ActiveValue::Set(params.note),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for line in &params.lines {
            entity::order_items::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                variant_id: ActiveValue::Set(line.variant_id),
                quantity: ActiveValue::Set(line.quantity),
                unit_price: ActiveValue::Set(line.unit_price),
                currency_unit: ActiveValue::Set(line.currency_unit.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            let Some(variant) = entity::prelude::ProductVariants::find_by_id(line.variant_id)
                .one(&txn)
                .await?
            else {
                txn.rollback().await?;
                return Err(DbErr::RecordNotFound(format!(
                    "Variant {} disappeared during checkout",
                    line.variant_id
                )));
            };

            let remaining = variant.stock_quantity - line.quantity;
            let mut variant_model: entity::product_variants::ActiveModel = variant.into();
            variant_model.stock_quantity = ActiveValue::Set(remaining);
            variant_model.updated_at = ActiveValue::Set(now);
            variant_model.update(&txn).await?;
        }

        if let Some(claim_id) = params.user_voucher_id {
            let Some(claim) = entity::prelude::UserVouchers::find_by_id(claim_id)
                .one(&txn)
                .await?
            else {
                txn.rollback().await?;
                return Err(DbErr::RecordNotFound(format!(
                    "Voucher claim {claim_id} disappeared during checkout"
                )));
            };

            let mut claim_model: entity::user_vouchers::ActiveModel = claim.into();
            claim_model.used_at = ActiveValue::Set(Some(now));
            claim_model.update(&txn).await?;
        }

        entity::prelude::CartItems::delete_many()
            .filter(entity::cart_items::Column::CartId.eq(params.cart_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(order)
    }

    pub async fn find_with_items(
        &self,
        id: i32,
    ) -> Result<Option<(entity::orders::Model, Vec<entity::order_items::Model>)>, DbErr> {
        let Some(order) = entity::prelude::Orders::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = order
            .find_related(entity::prelude::OrderItems)
            .order_by_asc(entity::order_items::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((order, items)))
    }

    pub async fn set_status(
        &self,
        order: entity::orders::Model,
        status: String,
    ) -> Result<entity::orders::Model, DbErr> {
        let mut model: entity::orders::ActiveModel = order.into();
        model.status = ActiveValue::Set(status);
        model.updated_at = ActiveValue::Set(Utc::now());
        model.update(self.db).await
    }

    /// Cancels a pending order and restores the reserved stock in one
    /// transaction.
    pub async fn cancel(&self, order_id: i32) -> Result<Option<entity::orders::Model>, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let Some(order) = entity::prelude::Orders::find_by_id(order_id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let items = entity::prelude::OrderItems::find()
            .filter(entity::order_items::Column::OrderId.eq(order_id))
            .all(&txn)
            .await?;

        for item in &items {
            if let Some(variant) = entity::prelude::ProductVariants::find_by_id(item.variant_id)
                .one(&txn)
                .await?
            {
                let restored = variant.stock_quantity + item.quantity;
                let mut variant_model: entity::product_variants::ActiveModel = variant.into();
                variant_model.stock_quantity = ActiveValue::Set(restored);
                variant_model.updated_at = ActiveValue::Set(now);
                variant_model.update(&txn).await?;
            }
        }

        let mut order_model: entity::orders::ActiveModel = order.into();
        order_model.status = ActiveValue::Set("CANCELLED".to_string());
        order_model.updated_at = ActiveValue::Set(now);
        let cancelled = order_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(cancelled))
    }
}
