use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::shipment::DispatchOrderDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        service::{order::OrderService, shipment::ShipmentService},
        state::AppState,
    },
};

/// POST /api/shipments (ADMIN)
/// Build one carrier package per shop for an order and create the carrier
/// orders.
pub async fn dispatch_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<DispatchOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let shipments = ShipmentService::new(&state.db, &state.carrier)
        .dispatch_order(dto.order_id)
        .await?;

    Ok((StatusCode::CREATED, Json(shipments)))
}

/// POST /api/shipments/preview (ADMIN)
/// Fee and delivery preview per package, nothing persisted.
pub async fn preview_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<DispatchOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let previews = ShipmentService::new(&state.db, &state.carrier)
        .preview_order(dto.order_id)
        .await?;

    Ok((StatusCode::OK, Json(previews)))
}

/// GET /api/orders/{id}/shipments
/// Owner or admin.
pub async fn get_order_shipments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let detail = OrderService::new(&state.db).detail(order_id).await?;
    if user.role != Role::Admin.as_str() && detail.order.user_id != user.id {
        return Err(AppError::NotFound(format!("order {order_id} not found")));
    }

    let shipments = ShipmentService::new(&state.db, &state.carrier)
        .list_for_order(order_id)
        .await?;

    Ok((StatusCode::OK, Json(shipments)))
}

/// GET /api/shipments/{id}/track
pub async fn track_shipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let tracked = ShipmentService::new(&state.db, &state.carrier)
        .track(id)
        .await?;

    Ok((StatusCode::OK, Json(tracked)))
}

/// POST /api/shipments/{id}/cancel (ADMIN)
pub async fn cancel_shipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let shipment = ShipmentService::new(&state.db, &state.carrier)
        .cancel(id)
        .await?;

    Ok((StatusCode::OK, Json(shipment)))
}

/// GET /api/shipments/provinces
/// Address picker passthrough to the carrier's master data.
pub async fn get_provinces(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let provinces = state.carrier.provinces().await?;

    Ok((StatusCode::OK, Json(provinces)))
}

/// GET /api/shipments/provinces/{province_id}/districts
pub async fn get_districts(
    State(state): State<AppState>,
    Path(province_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let districts = state.carrier.districts(province_id).await?;

    Ok((StatusCode::OK, Json(districts)))
}

/// GET /api/shipments/districts/{district_id}/wards
pub async fn get_wards(
    State(state): State<AppState>,
    Path(district_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let wards = state.carrier.wards(district_id).await?;

    Ok((StatusCode::OK, Json(wards)))
}
