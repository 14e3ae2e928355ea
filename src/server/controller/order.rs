use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{PaginatedDto, PaginationQuery},
        order::{CheckoutDto, OrderDto, UpdateOrderStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        service::order::OrderService,
        state::AppState,
    },
};

/// POST /api/orders
/// Checkout: turn the caller's cart into an order.
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CheckoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let order = OrderService::new(&state.db).checkout(&user, dto).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders
/// Admins see every order; everyone else sees their own.
pub async fn get_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let service = OrderService::new(&state.db);
    let page = if user.role == Role::Admin.as_str() {
        service.list(pagination.page, pagination.per_page).await?
    } else {
        service
            .list_for_user(user.id, pagination.page, pagination.per_page)
            .await?
    };

    Ok((StatusCode::OK, Json(PaginatedDto::<OrderDto>::from_page(page))))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let detail = OrderService::new(&state.db).detail(id).await?;

    // Non-admins cannot see other users' orders; absence and denial look
    // the same to avoid leaking order ids.
    if user.role != Role::Admin.as_str() && detail.order.user_id != user.id {
        return Err(AppError::NotFound(format!("order {id} not found")));
    }

    Ok((StatusCode::OK, Json(detail)))
}

/// PATCH /api/orders/{id}/status (ADMIN)
pub async fn update_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let order = OrderService::new(&state.db).set_status(id, dto.status).await?;

    Ok((StatusCode::OK, Json(order)))
}

/// POST /api/orders/{id}/cancel
/// Owner or admin; only while the order is still pending.
pub async fn cancel_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let service = OrderService::new(&state.db);
    let detail = service.detail(id).await?;

    if user.role != Role::Admin.as_str() && detail.order.user_id != user.id {
        return Err(AppError::NotFound(format!("order {id} not found")));
    }

    let order = service.cancel(id).await?;

    Ok((StatusCode::OK, Json(order)))
}
