use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250210_000001_create_users_table::Users, m20250211_000013_create_vouchers_table::Vouchers,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserVouchers::Table)
                    .if_not_exists()
                    .col(pk_auto(UserVouchers::Id))
                    .col(integer(UserVouchers::UserId))
                    .col(integer(UserVouchers::VoucherId))
                    .col(timestamp_null(UserVouchers::UsedAt))
                    .col(
                        timestamp(UserVouchers::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_vouchers_user_id")
                            .from(UserVouchers::Table, UserVouchers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_vouchers_voucher_id")
                            .from(UserVouchers::Table, UserVouchers::VoucherId)
                            .to(Vouchers::Table, Vouchers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserVouchers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserVouchers {
    Table,
    Id,
    UserId,
    VoucherId,
    UsedAt,
    CreatedAt,
}
