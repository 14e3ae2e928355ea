use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{PaginatedDto, PaginationQuery},
        voucher::{ClaimVoucherDto, UserVoucherDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::voucher::VoucherService,
        state::AppState,
    },
};

/// GET /api/user-vouchers
/// The caller's voucher claims.
pub async fn get_user_vouchers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let page = VoucherService::new(&state.db)
        .list_claims(user.id, pagination.page, pagination.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<UserVoucherDto>::from_page(page)),
    ))
}

/// POST /api/user-vouchers
/// Claim a voucher for later redemption at checkout.
pub async fn claim_voucher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<ClaimVoucherDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let claim = VoucherService::new(&state.db)
        .claim(user.id, dto.voucher_id)
        .await?;

    Ok((StatusCode::CREATED, Json(claim)))
}
