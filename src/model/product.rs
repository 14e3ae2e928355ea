use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::media::MediaDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub shop_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub base_price: i64,
    pub currency_unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::products::Model> for ProductDto {
    fn from(product: entity::products::Model) -> Self {
        Self {
            id: product.id,
            shop_id: product.shop_id,
            category_id: product.category_id,
            name: product.name,
            description: product.description,
            base_price: product.base_price,
            currency_unit: product.currency_unit,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Product detail: the product row plus its variants, each carrying its
/// media with rewritten URLs.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub variants: Vec<VariantDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VariantDto {
    pub id: i32,
    pub product_id: i32,
    pub color_id: i32,
    pub size: String,
    pub sku: Option<String>,
    pub price: i64,
    pub currency_unit: String,
    pub stock_quantity: i32,
    pub weight_grams: i32,
    pub length_mm: i32,
    pub width_mm: i32,
    pub height_mm: i32,
    #[serde(default)]
    pub media: Vec<MediaDto>,
}

impl VariantDto {
    pub fn from_model(variant: entity::product_variants::Model, media: Vec<MediaDto>) -> Self {
        Self {
            id: variant.id,
            product_id: variant.product_id,
            color_id: variant.color_id,
            size: variant.size,
            sku: variant.sku,
            price: variant.price,
            currency_unit: variant.currency_unit,
            stock_quantity: variant.stock_quantity,
            weight_grams: variant.weight_grams,
            length_mm: variant.length_mm,
            width_mm: variant.width_mm,
            height_mm: variant.height_mm,
            media,
        }
    }
}

impl From<entity::product_variants::Model> for VariantDto {
    fn from(variant: entity::product_variants::Model) -> Self {
        VariantDto::from_model(variant, Vec::new())
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateProductDto {
    pub shop_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub base_price: i64,
    #[serde(default = "default_currency")]
    pub currency_unit: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProductDto {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<i64>,
    pub currency_unit: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateVariantDto {
    pub color_id: i32,
    pub size: String,
    pub sku: Option<String>,
    pub price: i64,
    #[serde(default = "default_currency")]
    pub currency_unit: String,
    #[serde(default)]
    pub stock_quantity: i32,
    pub weight_grams: i32,
    pub length_mm: i32,
    pub width_mm: i32,
    pub height_mm: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateVariantDto {
    pub color_id: Option<i32>,
    pub size: Option<String>,
    pub sku: Option<String>,
    pub price: Option<i64>,
    pub currency_unit: Option<String>,
    pub stock_quantity: Option<i32>,
    pub weight_grams: Option<i32>,
    pub length_mm: Option<i32>,
    pub width_mm: Option<i32>,
    pub height_mm: Option<i32>,
}

fn default_currency() -> String {
    "VND".to_string()
}
