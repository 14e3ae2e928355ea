use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250210_000008_create_product_variants_table::ProductVariants,
    m20250211_000013_create_vouchers_table::Vouchers,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VoucherVariants::Table)
                    .if_not_exists()
                    .col(integer(VoucherVariants::VoucherId))
                    .col(integer(VoucherVariants::VariantId))
                    .primary_key(
                        Index::create()
                            .col(VoucherVariants::VoucherId)
                            .col(VoucherVariants::VariantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voucher_variants_voucher_id")
                            .from(VoucherVariants::Table, VoucherVariants::VoucherId)
                            .to(Vouchers::Table, Vouchers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voucher_variants_variant_id")
                            .from(VoucherVariants::Table, VoucherVariants::VariantId)
                            .to(ProductVariants::Table, ProductVariants::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VoucherVariants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VoucherVariants {
    Table,
    VoucherId,
    VariantId,
}
