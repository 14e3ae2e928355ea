use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ProductVariantFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    color_id: i32,
    size: String,
    sku: Option<String>,
    price: i64,
    stock_quantity: i32,
    weight_grams: i32,
    length_mm: i32,
    width_mm: i32,
    height_mm: i32,
}

impl<'a> ProductVariantFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, product_id: i32, color_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            product_id,
            color_id,
            size: "42".to_string(),
            sku: Some(format!("SKU-{id:06}")),
            price: 120_000,
            stock_quantity: 10,
            weight_grams: 400,
            length_mm: 320,
            width_mm: 210,
            height_mm: 120,
        }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn stock_quantity(mut self, stock_quantity: i32) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    pub fn weight_grams(mut self, weight_grams: i32) -> Self {
        self.weight_grams = weight_grams;
        self
    }

    pub fn dimensions(mut self, length_mm: i32, width_mm: i32, height_mm: i32) -> Self {
        self.length_mm = length_mm;
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self
    }

    pub async fn build(self) -> Result<entity::product_variants::Model, DbErr> {
        let now = Utc::now();
        entity::product_variants::ActiveModel {
            id: ActiveValue::NotSet,
            product_id: ActiveValue::Set(self.product_id),
            color_id: ActiveValue::Set(self.color_id),
            size: ActiveValue::Set(self.size),
            sku: ActiveValue::Set(self.sku),
            price: ActiveValue::Set(self.price),
            currency_unit: ActiveValue::Set("VND".to_string()),
            stock_quantity: ActiveValue::Set(self.stock_quantity),
            weight_grams: ActiveValue::Set(self.weight_grams),
            length_mm: ActiveValue::Set(self.length_mm),
            width_mm: ActiveValue::Set(self.width_mm),
            height_mm: ActiveValue::Set(self.height_mm),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_variant(
    db: &DatabaseConnection,
    product_id: i32,
    color_id: i32,
) -> Result<entity::product_variants::Model, DbErr> {
    ProductVariantFactory::new(db, product_id, color_id)
        .build()
        .await
}
