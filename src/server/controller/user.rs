use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{PaginatedDto, PaginationQuery},
        user::{UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::user::UpdateUserParams,
        service::crud::CrudService,
        state::AppState,
    },
};

const ROLES: &[&str] = &["ADMIN", "SHOP", "USER"];

fn service(state: &AppState) -> CrudService<'_, entity::prelude::Users> {
    CrudService::new(&state.db, "user")
}

/// GET /api/users (ADMIN)
pub async fn get_users(
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

    Ok((StatusCode::OK, Json(PaginatedDto::<UserDto>::from_page(page))))
}

/// GET /api/users/{id} (ADMIN)
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    let user = service(&state).get(id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// PATCH /api/users/{id} (ADMIN)
/// Partial update of profile fields, role and active flag.
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Admin])
        .await?;

    if let Some(role) = dto.role.as_deref() {
        if !ROLES.contains(&role) {
            return Err(AppError::BadRequest(format!("Unknown role '{role}'")));
        }
    }

    let user = service(&state)
        .update(id, UpdateUserParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// DELETE /api/users/{id} (ADMIN)
pub async fn delete_user(
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
