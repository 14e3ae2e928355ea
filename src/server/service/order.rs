use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::{
    model::order::{CheckoutDto, OrderDetailDto, OrderDto, OrderItemDto},
    server::{
        data::{
            cart::CartRepository,
            order::{CheckoutLine, CheckoutParams, OrderRepository},
            voucher::VoucherRepository,
        },
        error::AppError,
        model::page::Paginated,
        service::crud::CrudService,
    },
};

const ORDER_STATUSES: &[&str] = &["PENDING", "CONFIRMED", "SHIPPED", "DELIVERED", "CANCELLED"];

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Turns the caller's cart into an order.
    ///
    /// Prices are snapshotted from the variants, the optional voucher claim
    /// is validated and consumed, stock is decremented and the cart cleared;
    /// the whole write happens in one transaction.
    pub async fn checkout(
        &self,
        user: &entity::users::Model,
        dto: CheckoutDto,
    ) -> Result<OrderDetailDto, AppError> {
        let cart_repo = CartRepository::new(self.db);
        let cart = cart_repo.find_or_create(user.id).await?;
        let lines = cart_repo.items_with_variants(cart.id).await?;

        if lines.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }

        let address = CrudService::<entity::prelude::Addresses>::new(self.db, "address")
            .get(dto.address_id)
            .await?;
        if address.user_id != user.id {
            return Err(AppError::NotFound(format!(
                "address {} not found",
                dto.address_id
            )));
        }

        let mut checkout_lines = Vec::with_capacity(lines.len());
        let mut total: i64 = 0;
        let mut currency_unit = "VND".to_string();

        for (item, variant) in lines {
            let Some(variant) = variant else {
                return Err(AppError::BadRequest(format!(
                    "Cart references missing variant {}",
                    item.variant_id
                )));
            };

            if variant.stock_quantity < item.quantity {
                return Err(AppError::BadRequest(format!(
                    "Not enough stock for variant {}",
                    variant.id
                )));
            }

            total += variant.price * i64::from(item.quantity);
            currency_unit = variant.currency_unit.clone();

            checkout_lines.push(CheckoutLine {
                variant_id: variant.id,
                quantity: item.quantity,
                unit_price: variant.price,
                currency_unit: variant.currency_unit,
            });
        }

        let mut user_voucher_id = None;
        if let Some(code) = dto.voucher_code.as_deref() {
            let voucher_repo = VoucherRepository::new(self.db);
            let Some((claim, voucher)) = voucher_repo.find_unused_claim(user.id, code).await?
            else {
                return Err(AppError::BadRequest(
                    "No unused claim for that voucher code".to_string(),
                ));
            };

            let now = Utc::now();
            if now < voucher.starts_at || now > voucher.expires_at {
                return Err(AppError::BadRequest(
                    "Voucher is not valid right now".to_string(),
                ));
            }

            total = (total - voucher.discount_amount).max(0);
            user_voucher_id = Some(claim.id);
        }

        let order_repo = OrderRepository::new(self.db);
        let order = order_repo
            .create_from_cart(CheckoutParams {
                user_id: user.id,
                address_id: dto.address_id,
                note: dto.note,
                currency_unit,
                total_amount: total,
                lines: checkout_lines,
                cart_id: cart.id,
                user_voucher_id,
            })
            .await
            .map_err(|err| {
                tracing::error!("Checkout failed for user {}: {}", user.id, err);
                AppError::BadRequest("Could not place order".to_string())
            })?;

        tracing::info!("User {} placed order {}", user.id, order.id);

        self.detail(order.id).await
    }

    pub async fn detail(&self, order_id: i32) -> Result<OrderDetailDto, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let Some((order, items)) = order_repo.find_with_items(order_id).await? else {
            return Err(AppError::NotFound(format!("order {order_id} not found")));
        };

        Ok(OrderDetailDto {
            order: OrderDto::from(order),
            items: items.into_iter().map(OrderItemDto::from).collect(),
        })
    }

    /// All orders, ascending by id. Admin surface.
    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<entity::orders::Model>, AppError> {
        CrudService::<entity::prelude::Orders>::new(self.db, "order")
            .list(page, per_page)
            .await
    }

    /// The caller's own orders.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<entity::orders::Model>, AppError> {
        CrudService::<entity::prelude::Orders>::new(self.db, "order")
            .list_filtered(entity::orders::Column::UserId.eq(user_id), page, per_page)
            .await
    }

    pub async fn set_status(&self, order_id: i32, status: String) -> Result<OrderDto, AppError> {
        if !ORDER_STATUSES.contains(&status.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unknown order status '{status}'"
            )));
        }

        let order = CrudService::<entity::prelude::Orders>::new(self.db, "order")
            .get(order_id)
            .await?;

        let order_repo = OrderRepository::new(self.db);
        let updated = order_repo.set_status(order, status).await?;

        tracing::info!("Order {} status set to {}", updated.id, updated.status);
        Ok(OrderDto::from(updated))
    }

    /// Cancels a still-pending order, restoring stock.
    pub async fn cancel(&self, order_id: i32) -> Result<OrderDto, AppError> {
        let order = CrudService::<entity::prelude::Orders>::new(self.db, "order")
            .get(order_id)
            .await?;

        if order.status != "PENDING" {
            return Err(AppError::BadRequest(format!(
                "Order {} can no longer be cancelled",
                order_id
            )));
        }

        let order_repo = OrderRepository::new(self.db);
        let Some(cancelled) = order_repo.cancel(order_id).await? else {
            return Err(AppError::NotFound(format!("order {order_id} not found")));
        };

        tracing::info!("Order {} cancelled", cancelled.id);
        Ok(OrderDto::from(cancelled))
    }
}
