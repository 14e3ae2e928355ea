use sea_orm::DatabaseConnection;

use crate::{
    model::cart::{CartDto, CartItemDto},
    server::{data::cart::CartRepository, error::AppError},
};

/// One cart per user, created lazily on first access.
pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The caller's cart with its lines; prices reflect the variants'
    /// current prices.
    pub async fn get_cart(&self, user_id: i32) -> Result<CartDto, AppError> {
        let repo = CartRepository::new(self.db);
        let cart = repo.find_or_create(user_id).await?;
        let items = repo.items_with_variants(cart.id).await?;

        let items = items
            .into_iter()
            .map(|(item, variant)| {
                let (unit_price, currency_unit) = variant
                    .map(|v| (v.price, v.currency_unit))
                    .unwrap_or((0, "VND".to_string()));

                CartItemDto {
                    id: item.id,
                    variant_id: item.variant_id,
                    quantity: item.quantity,
                    unit_price,
                    currency_unit,
                }
            })
            .collect();

        Ok(CartDto {
            id: cart.id,
            user_id: cart.user_id,
            items,
        })
    }

    /// Adds a variant to the caller's cart, merging quantities.
    pub async fn add_item(
        &self,
        user_id: i32,
        variant_id: i32,
        quantity: i32,
    ) -> Result<CartDto, AppError> {
        if quantity < 1 {
            return Err(AppError::BadRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }

        use sea_orm::EntityTrait;
        let Some(variant) = entity::prelude::ProductVariants::find_by_id(variant_id)
            .one(self.db)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Product variant {variant_id} not found"
            )));
        };

        if variant.stock_quantity < quantity {
            return Err(AppError::BadRequest("Not enough stock".to_string()));
        }

        let repo = CartRepository::new(self.db);
        let cart = repo.find_or_create(user_id).await?;
        repo.add_item(cart.id, variant_id, quantity).await.map_err(|err| {
            tracing::error!("Failed to add cart item: {}", err);
            AppError::BadRequest("Could not add item to cart".to_string())
        })?;

        tracing::info!("User {} added variant {} to cart", user_id, variant_id);

        self.get_cart(user_id).await
    }

    /// Sets a line's quantity; zero or less removes the line.
    pub async fn update_item(
        &self,
        user_id: i32,
        item_id: i32,
        quantity: i32,
    ) -> Result<CartDto, AppError> {
        let repo = CartRepository::new(self.db);
        let cart = repo.find_or_create(user_id).await?;

        let Some(item) = repo.find_item(item_id).await? else {
            return Err(AppError::NotFound(format!("Cart item {item_id} not found")));
        };

        if item.cart_id != cart.id {
            return Err(AppError::NotFound(format!("Cart item {item_id} not found")));
        }

        if quantity <= 0 {
            repo.remove_item(item_id).await?;
        } else {
            repo.set_item_quantity(item, quantity).await?;
        }

        self.get_cart(user_id).await
    }

    pub async fn remove_item(&self, user_id: i32, item_id: i32) -> Result<CartDto, AppError> {
        let repo = CartRepository::new(self.db);
        let cart = repo.find_or_create(user_id).await?;

        let Some(item) = repo.find_item(item_id).await? else {
            return Err(AppError::NotFound(format!("Cart item {item_id} not found")));
        };

        if item.cart_id != cart.id {
            return Err(AppError::NotFound(format!("Cart item {item_id} not found")));
        }

        repo.remove_item(item_id).await?;

        self.get_cart(user_id).await
    }

    /// Empties the caller's cart.
    pub async fn clear(&self, user_id: i32) -> Result<(), AppError> {
        let repo = CartRepository::new(self.db);
        let cart = repo.find_or_create(user_id).await?;
        let removed = repo.clear(cart.id).await?;

        tracing::info!("Cleared {} items from cart {}", removed, cart.id);
        Ok(())
    }
}
