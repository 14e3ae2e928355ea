use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct VoucherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoucherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::vouchers::Model>, DbErr> {
        entity::prelude::Vouchers::find()
            .filter(entity::vouchers::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Attaches variants to a voucher; pairs that already exist are left
    /// in place.
    pub async fn attach_variants(&self, voucher_id: i32, variant_ids: &[i32]) -> Result<(), DbErr> {
        for &variant_id in variant_ids {
            let exists = entity::prelude::VoucherVariants::find_by_id((voucher_id, variant_id))
                .one(self.db)
                .await?
                .is_some();

            if exists {
                continue;
            }

            entity::voucher_variants::ActiveModel {
                voucher_id: ActiveValue::Set(voucher_id),
                variant_id: ActiveValue::Set(variant_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn detach_variants(&self, voucher_id: i32, variant_ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::VoucherVariants::delete_many()
            .filter(entity::voucher_variants::Column::VoucherId.eq(voucher_id))
            .filter(entity::voucher_variants::Column::VariantId.is_in(variant_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn variant_ids(&self, voucher_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::VoucherVariants::find()
            .filter(entity::voucher_variants::Column::VoucherId.eq(voucher_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.variant_id)
            .collect())
    }

    /// Total claims handed out for a voucher, used against `usage_limit`.
    pub async fn claim_count(&self, voucher_id: i32) -> Result<u64, DbErr> {
        entity::prelude::UserVouchers::find()
            .filter(entity::user_vouchers::Column::VoucherId.eq(voucher_id))
            .count(self.db)
            .await
    }

    pub async fn create_claim(
        &self,
        user_id: i32,
        voucher_id: i32,
    ) -> Result<entity::user_vouchers::Model, DbErr> {
        entity::user_vouchers::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            voucher_id: ActiveValue::Set(voucher_id),
            used_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_claim(
        &self,
        user_id: i32,
        voucher_id: i32,
    ) -> Result<Option<entity::user_vouchers::Model>, DbErr> {
        entity::prelude::UserVouchers::find()
            .filter(entity::user_vouchers::Column::UserId.eq(user_id))
            .filter(entity::user_vouchers::Column::VoucherId.eq(voucher_id))
            .one(self.db)
            .await
    }

    /// The caller's unused claim for a voucher code, with the voucher row.
    pub async fn find_unused_claim(
        &self,
        user_id: i32,
        code: &str,
    ) -> Result<Option<(entity::user_vouchers::Model, entity::vouchers::Model)>, DbErr> {
        let Some(voucher) = self.find_by_code(code).await? else {
            return Ok(None);
        };

        let claim = entity::prelude::UserVouchers::find()
            .filter(entity::user_vouchers::Column::UserId.eq(user_id))
            .filter(entity::user_vouchers::Column::VoucherId.eq(voucher.id))
            .filter(entity::user_vouchers::Column::UsedAt.is_null())
            .one(self.db)
            .await?;

        Ok(claim.map(|claim| (claim, voucher)))
    }
}
