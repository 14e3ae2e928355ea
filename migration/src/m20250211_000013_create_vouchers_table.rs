use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vouchers::Table)
                    .if_not_exists()
                    .col(pk_auto(Vouchers::Id))
                    .col(string_uniq(Vouchers::Code))
                    .col(string_null(Vouchers::Description))
                    .col(big_integer(Vouchers::DiscountAmount))
                    .col(string(Vouchers::CurrencyUnit).default("VND"))
                    .col(timestamp(Vouchers::StartsAt))
                    .col(timestamp(Vouchers::ExpiresAt))
                    .col(integer(Vouchers::UsageLimit).default(1))
                    .col(
                        timestamp(Vouchers::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Vouchers::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vouchers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vouchers {
    Table,
    Id,
    Code,
    Description,
    DiscountAmount,
    CurrencyUnit,
    StartsAt,
    ExpiresAt,
    UsageLimit,
    CreatedAt,
    UpdatedAt,
}
