use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::ColumnTrait;

use crate::{
    model::{
        address::{AddressDto, CreateAddressDto, UpdateAddressDto},
        api::{PaginatedDto, PaginationQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::address::{CreateAddressParams, UpdateAddressParams},
        service::crud::CrudService,
        state::AppState,
    },
};

fn service(state: &AppState) -> CrudService<'_, entity::prelude::Addresses> {
    CrudService::new(&state.db, "address")
}

/// Loads an address the caller is allowed to touch: their own, or any for
/// admins. Absence and denial both read as 404.
async fn owned_address(
    state: &AppState,
    user: &entity::users::Model,
    id: i32,
) -> Result<entity::addresses::Model, AppError> {
    let address = service(state).get(id).await?;

    if user.role != Role::Admin.as_str() && address.user_id != user.id {
        return Err(AppError::NotFound(format!("address {id} not found")));
    }

    Ok(address)
}

/// GET /api/address
/// The caller's addresses.
pub async fn get_addresses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let page = service(&state)
        .list_filtered(
            entity::addresses::Column::UserId.eq(user.id),
            pagination.page,
            pagination.per_page,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<AddressDto>::from_page(page)),
    ))
}

/// GET /api/address/{id}
pub async fn get_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let address = owned_address(&state, &user, id).await?;

    Ok((StatusCode::OK, Json(AddressDto::from(address))))
}

/// POST /api/address
pub async fn create_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    if dto.receiver_name.trim().is_empty() || dto.street.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Receiver name and street are required".to_string(),
        ));
    }

    let address = service(&state)
        .create(CreateAddressParams::from_dto(user.id, dto))
        .await?;

    Ok((StatusCode::CREATED, Json(AddressDto::from(address))))
}

/// PATCH /api/address/{id}
pub async fn update_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    owned_address(&state, &user, id).await?;

    let address = service(&state)
        .update(id, UpdateAddressParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(AddressDto::from(address))))
}

/// DELETE /api/address/{id}
pub async fn delete_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    owned_address(&state, &user, id).await?;
    service(&state).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
