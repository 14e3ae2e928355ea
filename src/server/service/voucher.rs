use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection};

use crate::{
    model::voucher::{UserVoucherDto, VoucherDto},
    server::{
        data::voucher::VoucherRepository,
        error::AppError,
        model::{
            page::Paginated,
            voucher::{CreateVoucherParams, UpdateVoucherParams},
        },
        service::crud::CrudService,
    },
};

pub struct VoucherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoucherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn crud(&self) -> CrudService<'a, entity::prelude::Vouchers> {
        CrudService::new(self.db, "voucher")
    }

    pub async fn create(&self, params: CreateVoucherParams) -> Result<VoucherDto, AppError> {
        if params.dto.code.trim().is_empty() {
            return Err(AppError::BadRequest("Voucher code is required".to_string()));
        }
        if params.dto.discount_amount <= 0 {
            return Err(AppError::BadRequest(
                "Discount must be positive".to_string(),
            ));
        }
        if params.dto.expires_at <= params.dto.starts_at {
            return Err(AppError::BadRequest(
                "Voucher must expire after it starts".to_string(),
            ));
        }

        let voucher = self.crud().create(params).await?;
        Ok(VoucherDto::from(voucher))
    }

    pub async fn get(&self, id: i32) -> Result<VoucherDto, AppError> {
        Ok(VoucherDto::from(self.crud().get(id).await?))
    }

    pub async fn list(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<entity::vouchers::Model>, AppError> {
        self.crud().list(page, per_page).await
    }

    pub async fn update(&self, id: i32, params: UpdateVoucherParams) -> Result<VoucherDto, AppError> {
        Ok(VoucherDto::from(self.crud().update(id, params).await?))
    }

    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        self.crud().remove(id).await
    }

    /// Scopes a voucher to specific product variants.
    pub async fn attach_variants(&self, id: i32, variant_ids: &[i32]) -> Result<Vec<i32>, AppError> {
        self.crud().get(id).await?;

        let repo = VoucherRepository::new(self.db);
        repo.attach_variants(id, variant_ids).await.map_err(|err| {
            tracing::error!("Failed to attach variants to voucher {}: {}", id, err);
            AppError::BadRequest("Could not attach variants".to_string())
        })?;

        Ok(repo.variant_ids(id).await?)
    }

    pub async fn detach_variants(&self, id: i32, variant_ids: &[i32]) -> Result<Vec<i32>, AppError> {
        self.crud().get(id).await?;

        let repo = VoucherRepository::new(self.db);
        repo.detach_variants(id, variant_ids).await?;

        Ok(repo.variant_ids(id).await?)
    }

    /// Claims a voucher for a user: one claim per user, inside the usage
    /// limit, only while the voucher is still valid.
    pub async fn claim(&self, user_id: i32, voucher_id: i32) -> Result<UserVoucherDto, AppError> {
        let voucher = self.crud().get(voucher_id).await?;

        if Utc::now() > voucher.expires_at {
            return Err(AppError::BadRequest("Voucher has expired".to_string()));
        }

        let repo = VoucherRepository::new(self.db);

        if repo.find_claim(user_id, voucher_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Voucher already claimed".to_string(),
            ));
        }

        if repo.claim_count(voucher_id).await? >= voucher.usage_limit as u64 {
            return Err(AppError::BadRequest(
                "Voucher is fully claimed".to_string(),
            ));
        }

        let claim = repo.create_claim(user_id, voucher_id).await.map_err(|err| {
            tracing::error!("Failed to claim voucher {}: {}", voucher_id, err);
            AppError::BadRequest("Could not claim voucher".to_string())
        })?;

        tracing::info!("User {} claimed voucher {}", user_id, voucher_id);
        Ok(UserVoucherDto::from(claim))
    }

    /// The caller's claims.
    pub async fn list_claims(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<entity::user_vouchers::Model>, AppError> {
        CrudService::<entity::prelude::UserVouchers>::new(self.db, "user voucher")
            .list_filtered(
                entity::user_vouchers::Column::UserId.eq(user_id),
                page,
                per_page,
            )
            .await
    }
}
