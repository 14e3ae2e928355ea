use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        media::CreateMediaDto,
        product::{
            CreateProductDto, CreateVariantDto, ProductDetailDto, ProductDto, UpdateProductDto,
            UpdateVariantDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::product::{
            CreateProductParams, CreateVariantParams, UpdateProductParams, UpdateVariantParams,
        },
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "products";

#[derive(Deserialize)]
pub struct ProductListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub category_id: Option<i32>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

fn service(state: &AppState) -> ProductService<'_> {
    ProductService::new(&state.db, state.storage.clone())
}

/// List products, optionally filtered by category.
///
/// Public endpoint; paginated, ordered by id.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category_id" = Option<i32>, Query, description = "Restrict to one category")
    ),
    responses(
        (status = 200, description = "One page of products"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = service(&state)
        .list(query.category_id, query.page, query.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<ProductDto>::from_page(page)),
    ))
}

/// Product detail with variants and media.
///
/// Public endpoint. Media URLs are rewritten to public URLs.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product with variants and media", body = ProductDetailDto),
        (status = 404, description = "Product not found", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = service(&state).detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// POST /api/products (SHOP or ADMIN)
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let product = service(&state)
        .create(CreateProductParams::from_dto(dto))
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// PATCH /api/products/{id} (owning SHOP or ADMIN)
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let product_service = service(&state);
    product_service.ensure_can_manage(&user, id).await?;

    let product = product_service
        .update(id, UpdateProductParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

/// DELETE /api/products/{id} (owning SHOP or ADMIN)
///
/// Deletes the product, its variants and their media in one transaction;
/// stored objects are cleaned up afterwards.
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let product_service = service(&state);
    product_service.ensure_can_manage(&user, id).await?;
    product_service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/products/{id}/variants
pub async fn get_variants(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = service(&state).detail(id).await?;

    Ok((StatusCode::OK, Json(detail.variants)))
}

/// POST /api/products/{id}/variants (owning SHOP or ADMIN)
pub async fn create_variant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<CreateVariantDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let product_service = service(&state);
    product_service.ensure_can_manage(&user, id).await?;

    let variant = product_service
        .add_variant(CreateVariantParams::from_dto(id, dto))
        .await?;

    Ok((StatusCode::CREATED, Json(variant)))
}

/// PATCH /api/products/{id}/variants/{variant_id} (owning SHOP or ADMIN)
pub async fn update_variant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, variant_id)): Path<(i32, i32)>,
    Json(dto): Json<UpdateVariantDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let product_service = service(&state);
    product_service.ensure_can_manage(&user, id).await?;

    let variant = product_service
        .update_variant(id, variant_id, UpdateVariantParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(variant)))
}

/// DELETE /api/products/{id}/variants/{variant_id} (owning SHOP or ADMIN)
pub async fn delete_variant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, variant_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let product_service = service(&state);
    product_service.ensure_can_manage(&user, id).await?;
    product_service.remove_variant(id, variant_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/products/{id}/variants/{variant_id}/media
pub async fn get_variant_media(
    State(state): State<AppState>,
    Path((id, variant_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let media = service(&state).list_media(id, variant_id).await?;

    Ok((StatusCode::OK, Json(media)))
}

/// POST /api/products/{id}/variants/{variant_id}/media (owning SHOP or ADMIN)
///
/// Records an already-uploaded storage object as a variant attachment.
pub async fn create_variant_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, variant_id)): Path<(i32, i32)>,
    Json(dto): Json<CreateMediaDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let product_service = service(&state);
    product_service.ensure_can_manage(&user, id).await?;
    product_service
        .add_media(id, variant_id, dto.storage_key, dto.kind)
        .await?;

    Ok(StatusCode::CREATED)
}
