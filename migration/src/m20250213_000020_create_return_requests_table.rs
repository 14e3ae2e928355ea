use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250210_000001_create_users_table::Users,
    m20250212_000017_create_order_items_table::OrderItems,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReturnRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(ReturnRequests::Id))
                    .col(integer(ReturnRequests::OrderItemId))
                    .col(integer(ReturnRequests::UserId))
                    .col(string(ReturnRequests::Reason))
                    .col(string(ReturnRequests::Status).default("REQUESTED"))
                    .col(
                        timestamp(ReturnRequests::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ReturnRequests::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_return_requests_order_item_id")
                            .from(ReturnRequests::Table, ReturnRequests::OrderItemId)
                            .to(OrderItems::Table, OrderItems::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_return_requests_user_id")
                            .from(ReturnRequests::Table, ReturnRequests::UserId)
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
            .drop_table(Table::drop().table(ReturnRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReturnRequests {
    Table,
    Id,
    OrderItemId,
    UserId,
    Reason,
    Status,
    CreatedAt,
    UpdatedAt,
}
