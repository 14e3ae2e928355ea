use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Colors::Table)
                    .if_not_exists()
                    .col(pk_auto(Colors::Id))
                    .col(string(Colors::Name))
                    .col(string_null(Colors::HexCode))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Colors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Colors {
    Table,
    Id,
    Name,
    HexCode,
}
