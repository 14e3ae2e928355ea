use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, PaginationQuery},
        catalog::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::catalog::{CreateCategoryParams, UpdateCategoryParams},
        service::crud::CrudService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

fn service(state: &AppState) -> CrudService<'_, entity::prelude::Categories> {
    CrudService::new(&state.db, "category")
}

/// List categories, paginated and ordered by id.
///
/// Public endpoint.
#[utoipa::path(
    get,
    path = "/api/category",
    tag = CATEGORY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "One page of categories"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = service(&state)
        .list(pagination.page, pagination.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<CategoryDto>::from_page(page)),
    ))
}

/// GET /api/category/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = service(&state).get(id).await?;

    Ok((StatusCode::OK, Json(CategoryDto::from(category))))
}

/// POST /api/category (ADMIN)
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("Category name is required".to_string()));
    }

    let category = service(&state)
        .create(CreateCategoryParams::from_dto(dto))
        .await?;

    Ok((StatusCode::CREATED, Json(CategoryDto::from(category))))
}

/// PATCH /api/category/{id} (ADMIN)
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let category = service(&state)
        .update(id, UpdateCategoryParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(CategoryDto::from(category))))
}

/// DELETE /api/category/{id} (ADMIN)
pub async fn delete_category(
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
