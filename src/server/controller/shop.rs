use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{PaginatedDto, PaginationQuery},
        shop::{CreateShopDto, ShopDto, UpdateShopDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::shop::{CreateShopParams, UpdateShopParams},
        service::crud::CrudService,
        state::AppState,
    },
};

fn service(state: &AppState) -> CrudService<'_, entity::prelude::Shops> {
    CrudService::new(&state.db, "shop")
}

/// GET /api/shops (ADMIN)
pub async fn get_shops(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let page = service(&state)
        .list(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(PaginatedDto::<ShopDto>::from_page(page))))
}

/// GET /api/shops/{id}
pub async fn get_shop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let shop = service(&state).get(id).await?;

    Ok((StatusCode::OK, Json(ShopDto::from(shop))))
}

/// POST /api/shops (ADMIN)
/// Registers a shop for a seller account.
pub async fn create_shop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateShopDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("Shop name is required".to_string()));
    }

    let shop = service(&state)
        .create(CreateShopParams::from_dto(dto))
        .await?;

    Ok((StatusCode::CREATED, Json(ShopDto::from(shop))))
}

/// PATCH /api/shops/{id} (ADMIN)
pub async fn update_shop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateShopDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let shop = service(&state)
        .update(id, UpdateShopParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(ShopDto::from(shop))))
}

/// DELETE /api/shops/{id} (ADMIN)
pub async fn delete_shop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    service(&state).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
