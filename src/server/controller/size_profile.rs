use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use sea_orm::ColumnTrait;

use crate::{
    model::{
        api::{PaginatedDto, PaginationQuery},
        size_profile::{CreateSizeProfileDto, SizeProfileDto, UpdateSizeProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::size_profile::{CreateSizeProfileParams, UpdateSizeProfileParams},
        service::crud::CrudService,
        state::AppState,
    },
};

fn service(state: &AppState) -> CrudService<'_, entity::prelude::SizeProfiles> {
    CrudService::new(&state.db, "size profile")
}

async fn owned_profile(
    state: &AppState,
    user: &entity::users::Model,
    id: i32,
) -> Result<entity::size_profiles::Model, AppError> {
    let profile = service(state).get(id).await?;

    if user.role != Role::Admin.as_str() && profile.user_id != user.id {
        return Err(AppError::NotFound(format!("size profile {id} not found")));
    }

    Ok(profile)
}

/// GET /api/size-profiles
pub async fn get_size_profiles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let page = service(&state)
        .list_filtered(
            entity::size_profiles::Column::UserId.eq(user.id),
            pagination.page,
            pagination.per_page,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<SizeProfileDto>::from_page(page)),
    ))
}

/// GET /api/size-profiles/{id}
pub async fn get_size_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let profile = owned_profile(&state, &user, id).await?;

    Ok((StatusCode::OK, Json(SizeProfileDto::from(profile))))
}

/// POST /api/size-profiles
pub async fn create_size_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateSizeProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    if dto.height_cm <= 0 || dto.weight_kg <= 0 {
        return Err(AppError::BadRequest(
            "Height and weight must be positive".to_string(),
        ));
    }

    let profile = service(&state)
        .create(CreateSizeProfileParams::from_dto(user.id, dto))
        .await?;

    Ok((StatusCode::CREATED, Json(SizeProfileDto::from(profile))))
}

/// PATCH /api/size-profiles/{id}
pub async fn update_size_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateSizeProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    owned_profile(&state, &user, id).await?;

    let profile = service(&state)
        .update(id, UpdateSizeProfileParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(SizeProfileDto::from(profile))))
}

/// DELETE /api/size-profiles/{id}
pub async fn delete_size_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    owned_profile(&state, &user, id).await?;
    service(&state).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
