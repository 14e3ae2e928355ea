use sea_orm_migration::{prelude::*, schema::*};

use super::m20250210_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(pk_auto(Addresses::Id))
                    .col(integer(Addresses::UserId))
                    .col(string(Addresses::ReceiverName))
                    .col(string(Addresses::Phone))
                    .col(integer(Addresses::ProvinceId))
                    .col(integer(Addresses::DistrictId))
                    .col(string(Addresses::WardCode))
                    .col(string(Addresses::Street))
                    .col(boolean(Addresses::IsDefault).default(false))
                    .col(
                        timestamp(Addresses::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Addresses::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_user_id")
                            .from(Addresses::Table, Addresses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Addresses {
    Table,
    Id,
    UserId,
    ReceiverName,
    Phone,
    ProvinceId,
    DistrictId,
    WardCode,
    Street,
    IsDefault,
    CreatedAt,
    UpdatedAt,
}
