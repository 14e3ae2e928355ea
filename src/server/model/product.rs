use chrono::Utc;
use sea_orm::ActiveValue;

use crate::{
    model::product::{CreateProductDto, CreateVariantDto, UpdateProductDto, UpdateVariantDto},
    server::service::crud::{CreateParams, UpdateParams},
};

pub struct CreateProductParams {
    pub dto: CreateProductDto,
}

impl CreateProductParams {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self { dto }
    }
}

impl CreateParams<entity::prelude::Products> for CreateProductParams {
    type ActiveModel = entity::products::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::products::ActiveModel {
            shop_id: ActiveValue::Set(self.dto.shop_id),
            category_id: ActiveValue::Set(self.dto.category_id),
            name: ActiveValue::Set(self.dto.name),
            description: ActiveValue::Set(self.dto.description),
            base_price: ActiveValue::Set(self.dto.base_price),
            currency_unit: ActiveValue::Set(self.dto.currency_unit),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateProductParams {
    pub dto: UpdateProductDto,
}

impl UpdateProductParams {
    pub fn from_dto(dto: UpdateProductDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::Products> for UpdateProductParams {
    type ActiveModel = entity::products::ActiveModel;

    fn apply(self, current: entity::products::Model) -> Self::ActiveModel {
        let mut model: entity::products::ActiveModel = current.into();

        if let Some(category_id) = self.dto.category_id {
            model.category_id = ActiveValue::Set(category_id);
        }
        if let Some(name) = self.dto.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = self.dto.description {
            model.description = ActiveValue::Set(Some(description));
        }
        if let Some(base_price) = self.dto.base_price {
            model.base_price = ActiveValue::Set(base_price);
        }
        if let Some(currency_unit) = self.dto.currency_unit {
            model.currency_unit = ActiveValue::Set(currency_unit);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}

pub struct CreateVariantParams {
    pub product_id: i32,
    pub dto: CreateVariantDto,
}

impl CreateVariantParams {
    pub fn from_dto(product_id: i32, dto: CreateVariantDto) -> Self {
        Self { product_id, dto }
    }
}

impl CreateParams<entity::prelude::ProductVariants> for CreateVariantParams {
    type ActiveModel = entity::product_variants::ActiveModel;

    fn into_active_model(self) -> Self::ActiveModel {
        let now = Utc::now();
        entity::product_variants::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            color_id: ActiveValue::Set(self.dto.color_id),
            size: ActiveValue::Set(self.dto.size),
            sku: ActiveValue::Set(self.dto.sku),
            price: ActiveValue::Set(self.dto.price),
            currency_unit: ActiveValue::Set(self.dto.currency_unit),
            stock_quantity: ActiveValue::Set(self.dto.stock_quantity),
            weight_grams: ActiveValue::Set(self.dto.weight_grams),
            length_mm: ActiveValue::Set(self.dto.length_mm),
            width_mm: ActiveValue::Set(self.dto.width_mm),
            height_mm: ActiveValue::Set(self.dto.height_mm),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

pub struct UpdateVariantParams {
    pub dto: UpdateVariantDto,
}

impl UpdateVariantParams {
    pub fn from_dto(dto: UpdateVariantDto) -> Self {
        Self { dto }
    }
}

impl UpdateParams<entity::prelude::ProductVariants> for UpdateVariantParams {
    type ActiveModel = entity::product_variants::ActiveModel;

    fn apply(self, current: entity::product_variants::Model) -> Self::ActiveModel {
        let mut model: entity::product_variants::ActiveModel = current.into();

        if let Some(color_id) = self.dto.color_id {
            model.color_id = ActiveValue::Set(color_id);
        }
        if let Some(size) = self.dto.size {
            model.size = ActiveValue::Set(size);
        }
        if let Some(sku) = self.dto.sku {
            model.sku = ActiveValue::Set(Some(sku));
        }
        if let Some(price) = self.dto.price {
            model.price = ActiveValue::Set(price);
        }
        if let Some(currency_unit) = self.dto.currency_unit {
            model.currency_unit = ActiveValue::Set(currency_unit);
        }
        if let Some(stock_quantity) = self.dto.stock_quantity {
            model.stock_quantity = ActiveValue::Set(stock_quantity);
        }
        if let Some(weight_grams) = self.dto.weight_grams {
            model.weight_grams = ActiveValue::Set(weight_grams);
        }
        if let Some(length_mm) = self.dto.length_mm {
            model.length_mm = ActiveValue::Set(length_mm);
        }
        if let Some(width_mm) = self.dto.width_mm {
            model.width_mm = ActiveValue::Set(width_mm);
        }
        if let Some(height_mm) = self.dto.height_mm {
            model.height_mm = ActiveValue::Set(height_mm);
        }
        model.updated_at = ActiveValue::Set(Utc::now());

        model
    }
}
