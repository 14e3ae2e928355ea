use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Add entity tables in dependency order (tables with foreign keys after
/// their referenced tables), then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Categories, Colors};
///
/// let test = TestBuilder::new()
///     .with_table(Categories)
///     .with_table(Colors)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the SeaORM entity using the
    /// SQLite backend, foreign keys included.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the catalog tables in dependency order: users, categories,
    /// colors, shops, products, product variants, reviews, media.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Users)
            .with_table(Categories)
            .with_table(Colors)
            .with_table(Shops)
            .with_table(Products)
            .with_table(ProductVariants)
            .with_table(Reviews)
            .with_table(Media)
    }

    /// Catalog tables plus carts and cart items.
    pub fn with_cart_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Carts)
            .with_table(CartItems)
    }

    /// Everything an order flow touches: cart tables plus addresses,
    /// vouchers, claims, orders, order items, shipments and shop offices.
    pub fn with_order_tables(self) -> Self {
        self.with_cart_tables()
            .with_table(Addresses)
            .with_table(Vouchers)
            .with_table(VoucherVariants)
            .with_table(UserVouchers)
            .with_table(Orders)
            .with_table(OrderItems)
            .with_table(Shipments)
            .with_table(ShopOffices)
    }

    /// Builds and initializes the test context with the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
