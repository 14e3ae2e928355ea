use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{PaginatedDto, PaginationQuery},
        voucher::{CreateVoucherDto, UpdateVoucherDto, VoucherDto, VoucherVariantsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::voucher::{CreateVoucherParams, UpdateVoucherParams},
        service::voucher::VoucherService,
        state::AppState,
    },
};

/// GET /api/vouchers (ADMIN)
pub async fn get_vouchers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let page = VoucherService::new(&state.db)
        .list(pagination.page, pagination.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<VoucherDto>::from_page(page)),
    ))
}

/// GET /api/vouchers/{id} (ADMIN)
pub async fn get_voucher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let voucher = VoucherService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(voucher)))
}

/// POST /api/vouchers (ADMIN)
pub async fn create_voucher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateVoucherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let voucher = VoucherService::new(&state.db)
        .create(CreateVoucherParams::from_dto(dto))
        .await?;

    Ok((StatusCode::CREATED, Json(voucher)))
}

/// PATCH /api/vouchers/{id} (ADMIN)
pub async fn update_voucher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateVoucherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let voucher = VoucherService::new(&state.db)
        .update(id, UpdateVoucherParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(voucher)))
}

/// DELETE /api/vouchers/{id} (ADMIN)
pub async fn delete_voucher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    VoucherService::new(&state.db).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/vouchers/{id}/variants (ADMIN)
/// Scope the voucher to product variants.
pub async fn attach_voucher_variants(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<VoucherVariantsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let variant_ids = VoucherService::new(&state.db)
        .attach_variants(id, &dto.variant_ids)
        .await?;

    Ok((StatusCode::OK, Json(variant_ids)))
}

/// DELETE /api/vouchers/{id}/variants (ADMIN)
pub async fn detach_voucher_variants(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<VoucherVariantsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let variant_ids = VoucherService::new(&state.db)
        .detach_variants(id, &dto.variant_ids)
        .await?;

    Ok((StatusCode::OK, Json(variant_ids)))
}
