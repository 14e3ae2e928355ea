use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250210_000003_create_shops_table::Shops,
    m20250210_000005_create_categories_table::Categories,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(integer(Products::ShopId))
                    .col(integer(Products::CategoryId))
                    .col(string(Products::Name))
                    .col(text_null(Products::Description))
                    .col(big_integer(Products::BasePrice))
                    .col(string(Products::CurrencyUnit).default("VND"))
                    .col(
                        timestamp(Products::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Products::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_shop_id")
                            .from(Products::Table, Products::ShopId)
                            .to(Shops::Table, Shops::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category_id")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    ShopId,
    CategoryId,
    Name,
    Description,
    BasePrice,
    CurrencyUnit,
    CreatedAt,
    UpdatedAt,
}
