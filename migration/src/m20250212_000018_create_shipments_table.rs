use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250210_000003_create_shops_table::Shops, m20250212_000016_create_orders_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shipments::Table)
                    .if_not_exists()
                    .col(pk_auto(Shipments::Id))
                    .col(integer(Shipments::OrderId))
                    .col(integer(Shipments::ShopId))
                    .col(string_null(Shipments::CarrierCode))
                    .col(integer_null(Shipments::ServiceId))
                    .col(big_integer(Shipments::FeeAmount))
                    .col(string(Shipments::CurrencyUnit).default("VND"))
                    .col(string(Shipments::Status).default("CREATED"))
                    .col(timestamp_null(Shipments::ExpectedDelivery))
                    .col(
                        timestamp(Shipments::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Shipments::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipments_order_id")
                            .from(Shipments::Table, Shipments::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipments_shop_id")
                            .from(Shipments::Table, Shipments::ShopId)
                            .to(Shops::Table, Shops::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shipments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shipments {
    Table,
    Id,
    OrderId,
    ShopId,
    CarrierCode,
    ServiceId,
    FeeAmount,
    CurrencyUnit,
    Status,
    ExpectedDelivery,
    CreatedAt,
    UpdatedAt,
}
