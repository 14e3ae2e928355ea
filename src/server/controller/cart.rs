use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::cart::{AddCartItemDto, UpdateCartItemDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::cart::CartService, state::AppState,
    },
};

/// GET /api/cart
/// The caller's cart, created on first access.
pub async fn get_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db).get_cart(user.id).await?;

    Ok((StatusCode::OK, Json(cart)))
}

/// DELETE /api/cart
/// Empty the caller's cart.
pub async fn clear_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    CartService::new(&state.db).clear(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/cart-items
pub async fn add_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db)
        .add_item(user.id, dto.variant_id, dto.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(cart)))
}

/// PATCH /api/cart-items/{id}
pub async fn update_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db)
        .update_item(user.id, id, dto.quantity)
        .await?;

    Ok((StatusCode::OK, Json(cart)))
}

/// DELETE /api/cart-items/{id}
pub async fn delete_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db).remove_item(user.id, id).await?;

    Ok((StatusCode::OK, Json(cart)))
}
