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
                    .table(SizeProfiles::Table)
                    .if_not_exists()
                    .col(pk_auto(SizeProfiles::Id))
                    .col(integer(SizeProfiles::UserId))
                    .col(integer(SizeProfiles::HeightCm))
                    .col(integer(SizeProfiles::WeightKg))
                    .col(integer_null(SizeProfiles::FootLengthMm))
                    .col(string_null(SizeProfiles::Notes))
                    .col(
                        timestamp(SizeProfiles::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(SizeProfiles::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_size_profiles_user_id")
                            .from(SizeProfiles::Table, SizeProfiles::UserId)
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
            .drop_table(Table::drop().table(SizeProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SizeProfiles {
    Table,
    Id,
    UserId,
    HeightCm,
    WeightKg,
    FootLengthMm,
    Notes,
    CreatedAt,
    UpdatedAt,
}
