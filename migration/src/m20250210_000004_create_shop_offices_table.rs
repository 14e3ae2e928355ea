use sea_orm_migration::{prelude::*, schema::*};

use super::m20250210_000003_create_shops_table::Shops;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopOffices::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopOffices::Id))
                    .col(integer(ShopOffices::ShopId))
                    .col(string(ShopOffices::Name))
                    .col(integer(ShopOffices::ProvinceId))
                    .col(integer(ShopOffices::DistrictId))
                    .col(string(ShopOffices::WardCode))
                    .col(string(ShopOffices::Street))
                    .col(boolean(ShopOffices::IsPickup).default(false))
                    .col(
                        timestamp(ShopOffices::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ShopOffices::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_offices_shop_id")
                            .from(ShopOffices::Table, ShopOffices::ShopId)
                            .to(Shops::Table, Shops::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopOffices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopOffices {
    Table,
    Id,
    ShopId,
    Name,
    ProvinceId,
    DistrictId,
    WardCode,
    Street,
    IsPickup,
    CreatedAt,
    UpdatedAt,
}
