//! Product factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db, shop.id, category.id)
///     .name("Runner X")
///     .base_price(150_000)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    shop_id: i32,
    category_id: i32,
    name: String,
    description: Option<String>,
    base_price: i64,
    currency_unit: String,
}

impl<'a> ProductFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, shop_id: i32, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            shop_id,
            category_id,
            name: format!("Product {id}"),
            description: Some("Test product description".to_string()),
            base_price: 100_000,
            currency_unit: "VND".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn base_price(mut self, base_price: i64) -> Self {
        self.base_price = base_price;
        self
    }

    pub async fn build(self) -> Result<entity::products::Model, DbErr> {
        let now = Utc::now();
        entity::products::ActiveModel {
            id: ActiveValue::NotSet,
            shop_id: ActiveValue::Set(self.shop_id),
            category_id: ActiveValue::Set(self.category_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            base_price: ActiveValue::Set(self.base_price),
            currency_unit: ActiveValue::Set(self.currency_unit),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_product(
    db: &DatabaseConnection,
    shop_id: i32,
    category_id: i32,
) -> Result<entity::products::Model, DbErr> {
    ProductFactory::new(db, shop_id, category_id).build().await
}
