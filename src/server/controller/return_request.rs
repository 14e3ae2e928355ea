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
        return_request::{CreateReturnRequestDto, ReturnRequestDto, UpdateReturnRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::return_request::{CreateReturnRequestParams, UpdateReturnRequestParams},
        service::crud::CrudService,
        state::AppState,
    },
};

const RETURN_STATUSES: &[&str] = &["REQUESTED", "APPROVED", "REJECTED", "REFUNDED"];

fn service(state: &AppState) -> CrudService<'_, entity::prelude::ReturnRequests> {
    CrudService::new(&state.db, "return request")
}

/// GET /api/return-requests
/// Admins see every request; everyone else sees their own.
pub async fn get_return_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let service = service(&state);
    let page = if user.role == Role::Admin.as_str() {
        service.list(pagination.page, pagination.per_page).await?
    } else {
        service
            .list_filtered(
                entity::return_requests::Column::UserId.eq(user.id),
                pagination.page,
                pagination.per_page,
            )
            .await?
    };

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<ReturnRequestDto>::from_page(page)),
    ))
}

/// GET /api/return-requests/{id}
pub async fn get_return_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let request = service(&state).get(id).await?;

    if user.role != Role::Admin.as_str() && request.user_id != user.id {
        return Err(AppError::NotFound(format!("return request {id} not found")));
    }

    Ok((StatusCode::OK, Json(ReturnRequestDto::from(request))))
}

/// POST /api/return-requests
pub async fn create_return_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateReturnRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    if dto.reason.trim().is_empty() {
        return Err(AppError::BadRequest("A reason is required".to_string()));
    }

    let request = service(&state)
        .create(CreateReturnRequestParams::from_dto(user.id, dto))
        .await?;

    Ok((StatusCode::CREATED, Json(ReturnRequestDto::from(request))))
}

/// PATCH /api/return-requests/{id} (ADMIN)
/// Decide on a return request.
pub async fn update_return_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateReturnRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    if !RETURN_STATUSES.contains(&dto.status.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown return status '{}'",
            dto.status
        )));
    }

    let request = service(&state)
        .update(id, UpdateReturnRequestParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(ReturnRequestDto::from(request))))
}

/// DELETE /api/return-requests/{id} (ADMIN)
pub async fn delete_return_request(
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
