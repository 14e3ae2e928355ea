use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250210_000006_create_colors_table::Colors, m20250210_000007_create_products_table::Products,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductVariants::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductVariants::Id))
                    .col(integer(ProductVariants::ProductId))
                    .col(integer(ProductVariants::ColorId))
                    .col(string(ProductVariants::Size))
                    .col(big_integer(ProductVariants::Price))
                    .col(string(ProductVariants::CurrencyUnit).default("VND"))
                    .col(integer(ProductVariants::StockQuantity).default(0))
                    .col(integer(ProductVariants::WeightGrams))
                    .col(integer(ProductVariants::LengthMm))
                    .col(integer(ProductVariants::WidthMm))
                    .col(integer(ProductVariants::HeightMm))
                    .col(
                        timestamp(ProductVariants::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ProductVariants::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_variants_product_id")
                            .from(ProductVariants::Table, ProductVariants::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_variants_color_id")
                            .from(ProductVariants::Table, ProductVariants::ColorId)
                            .to(Colors::Table, Colors::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductVariants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductVariants {
    Table,
    Id,
    ProductId,
    ColorId,
    Size,
    Sku,
    Price,
    CurrencyUnit,
    StockQuantity,
    WeightGrams,
    LengthMm,
    WidthMm,
    HeightMm,
    CreatedAt,
    UpdatedAt,
}
