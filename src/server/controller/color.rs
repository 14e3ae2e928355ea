use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{PaginatedDto, PaginationQuery},
        catalog::{ColorDto, CreateColorDto, UpdateColorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::catalog::{CreateColorParams, UpdateColorParams},
        service::crud::CrudService,
        state::AppState,
    },
};

fn service(state: &AppState) -> CrudService<'_, entity::prelude::Colors> {
    CrudService::new(&state.db, "color")
}

/// GET /api/color
pub async fn get_colors(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = service(&state)
        .list(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(PaginatedDto::<ColorDto>::from_page(page))))
}

/// GET /api/color/{id}
pub async fn get_color(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let color = service(&state).get(id).await?;

    Ok((StatusCode::OK, Json(ColorDto::from(color))))
}

/// POST /api/color (ADMIN)
pub async fn create_color(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateColorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("Color name is required".to_string()));
    }

    let color = service(&state)
        .create(CreateColorParams::from_dto(dto))
        .await?;

    Ok((StatusCode::CREATED, Json(ColorDto::from(color))))
}

/// PATCH /api/color/{id} (ADMIN)
pub async fn update_color(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateColorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let color = service(&state)
        .update(id, UpdateColorParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(ColorDto::from(color))))
}

/// DELETE /api/color/{id} (ADMIN)
pub async fn delete_color(
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
