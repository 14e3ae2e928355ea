use sea_orm::{ColumnTrait, DatabaseConnection};
use std::sync::Arc;

use crate::{
    model::product::{ProductDetailDto, ProductDto, VariantDto},
    server::{
        data::{
            crud::CrudRepository,
            media::{MediaOwner, MediaRepository},
            product::ProductRepository,
        },
        error::AppError,
        model::{
            page::Paginated,
            product::{
                CreateProductParams, CreateVariantParams, UpdateProductParams, UpdateVariantParams,
            },
        },
        service::crud::CrudService,
        storage::{rewrite_media, ObjectStorage},
    },
};

/// Catalog products with their variants and media. The deep delete here is
/// the one multi-step transactional flow in the system.
pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    storage: Arc<dyn ObjectStorage>,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { db, storage }
    }

    fn crud(&self) -> CrudService<'a, entity::prelude::Products> {
        CrudService::new(self.db, "product")
    }

    fn variant_crud(&self) -> CrudService<'a, entity::prelude::ProductVariants> {
        CrudService::new(self.db, "product variant")
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<ProductDto, AppError> {
        if params.dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Product name is required".to_string()));
        }
        if params.dto.base_price < 0 {
            return Err(AppError::BadRequest("Price cannot be negative".to_string()));
        }

        let product = self.crud().create(params).await?;
        Ok(ProductDto::from(product))
    }

    pub async fn list(
        &self,
        category_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<entity::products::Model>, AppError> {
        match category_id {
            Some(category_id) => {
                self.crud()
                    .list_filtered(
                        entity::products::Column::CategoryId.eq(category_id),
                        page,
                        per_page,
                    )
                    .await
            }
            None => self.crud().list(page, per_page).await,
        }
    }

    /// Product with variants; each variant carries its media with public
    /// URLs.
    pub async fn detail(&self, id: i32) -> Result<ProductDetailDto, AppError> {
        let product_repo = ProductRepository::new(self.db);

        let Some((product, variants)) = product_repo.get_with_variants(id).await? else {
            return Err(AppError::NotFound(format!("product {id} not found")));
        };

        let media_repo = MediaRepository::new(self.db);
        let variant_ids: Vec<i32> = variants.iter().map(|v| v.id).collect();
        let mut media_by_variant: std::collections::HashMap<i32, Vec<entity::media::Model>> =
            std::collections::HashMap::new();

        for media in media_repo.find_by_variants(variant_ids).await? {
            if let Some(variant_id) = media.variant_id {
                media_by_variant.entry(variant_id).or_default().push(media);
            }
        }

        let variants = variants
            .into_iter()
            .map(|variant| {
                let media = media_by_variant.remove(&variant.id).unwrap_or_default();
                VariantDto::from_model(variant, rewrite_media(media, self.storage.as_ref()))
            })
            .collect();

        Ok(ProductDetailDto {
            product: ProductDto::from(product),
            variants,
        })
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<ProductDto, AppError> {
        let product = self.crud().update(id, params).await?;
        Ok(ProductDto::from(product))
    }

    /// Deletes the product, its variants and their media rows in one
    /// transaction, then best-effort deletes the stored objects.
    ///
    /// Storage deletes run after commit: a failing store call leaves an
    /// orphaned object (logged) but never a half-deleted product.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let product_repo = ProductRepository::new(self.db);

        let storage_keys = match product_repo.delete_deep(id).await {
            Ok(Some(keys)) => keys,
            Ok(None) => return Err(AppError::NotFound(format!("product {id} not found"))),
            Err(err) => {
                tracing::error!("Failed to delete product {}: {}", id, err);
                return Err(AppError::BadRequest("Could not delete product".to_string()));
            }
        };

        for key in &storage_keys {
            if let Err(err) = self.storage.delete(key).await {
                tracing::warn!("Orphaned storage object '{}': {}", key, err);
            }
        }

        tracing::info!(
            "Deleted product {} and {} stored objects",
            id,
            storage_keys.len()
        );
        Ok(())
    }

    pub async fn add_variant(&self, params: CreateVariantParams) -> Result<VariantDto, AppError> {
        // The parent must exist; a dangling product_id would otherwise
        // surface as an opaque constraint error.
        self.crud().get(params.product_id).await?;

        let variant = self.variant_crud().create(params).await?;
        Ok(VariantDto::from(variant))
    }

    pub async fn update_variant(
        &self,
        product_id: i32,
        variant_id: i32,
        params: UpdateVariantParams,
    ) -> Result<VariantDto, AppError> {
        self.ensure_variant_of(product_id, variant_id).await?;

        let variant = self.variant_crud().update(variant_id, params).await?;
        Ok(VariantDto::from(variant))
    }

    /// Deletes a variant; its media rows cascade, the stored objects are
    /// cleaned up best-effort afterwards.
    pub async fn remove_variant(&self, product_id: i32, variant_id: i32) -> Result<(), AppError> {
        self.ensure_variant_of(product_id, variant_id).await?;

        let media_repo = MediaRepository::new(self.db);
        let storage_keys: Vec<String> = media_repo
            .find_by_variant(variant_id)
            .await?
            .into_iter()
            .map(|m| m.storage_key)
            .collect();

        self.variant_crud().remove(variant_id).await?;

        for key in &storage_keys {
            if let Err(err) = self.storage.delete(key).await {
                tracing::warn!("Orphaned storage object '{}': {}", key, err);
            }
        }

        Ok(())
    }

    /// Records an already-uploaded object as a variant attachment.
    pub async fn add_media(
        &self,
        product_id: i32,
        variant_id: i32,
        storage_key: String,
        kind: String,
    ) -> Result<(), AppError> {
        if storage_key.trim().is_empty() {
            return Err(AppError::BadRequest("Storage key is required".to_string()));
        }

        self.ensure_variant_of(product_id, variant_id).await?;

        let media_repo = MediaRepository::new(self.db);
        media_repo
            .create(storage_key, kind, MediaOwner::Variant(variant_id))
            .await
            .map_err(|err| {
                tracing::error!("Failed to attach media: {}", err);
                AppError::BadRequest("Could not attach media".to_string())
            })?;

        Ok(())
    }

    pub async fn list_media(
        &self,
        product_id: i32,
        variant_id: i32,
    ) -> Result<Vec<crate::model::media::MediaDto>, AppError> {
        self.ensure_variant_of(product_id, variant_id).await?;

        let media_repo = MediaRepository::new(self.db);
        let media = media_repo.find_by_variant(variant_id).await?;

        Ok(rewrite_media(media, self.storage.as_ref()))
    }

    async fn ensure_variant_of(&self, product_id: i32, variant_id: i32) -> Result<(), AppError> {
        let variant = self.variant_crud().get(variant_id).await?;

        if variant.product_id != product_id {
            return Err(AppError::NotFound(format!(
                "product variant {variant_id} not found"
            )));
        }

        Ok(())
    }

    /// Shop owners may only manage their own products; admins may manage
    /// everything.
    pub async fn ensure_can_manage(
        &self,
        user: &entity::users::Model,
        product_id: i32,
    ) -> Result<(), AppError> {
        if user.role == "ADMIN" {
            return Ok(());
        }

        let product = self.crud().get(product_id).await?;
        let shop = CrudRepository::<entity::prelude::Shops>::new(self.db)
            .find_by_id(product.shop_id)
            .await?;

        match shop {
            Some(shop) if shop.owner_id == user.id => Ok(()),
            _ => Err(AppError::AuthErr(
                crate::server::error::auth::AuthError::AccessDenied {
                    user_id: user.id,
                    role: user.role.clone(),
                    message: format!("not the owner of product {product_id}"),
                },
            )),
        }
    }
}
