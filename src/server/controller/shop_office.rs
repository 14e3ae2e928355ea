use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{PaginatedDto, PaginationQuery},
        shop_office::{CreateShopOfficeDto, ShopOfficeDto, UpdateShopOfficeDto},
    },
    server::{
        data::crud::CrudRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Role},
        model::shop_office::{CreateShopOfficeParams, UpdateShopOfficeParams},
        service::crud::CrudService,
        state::AppState,
    },
};

fn service(state: &AppState) -> CrudService<'_, entity::prelude::ShopOffices> {
    CrudService::new(&state.db, "shop office")
}

/// Shop users may only manage offices of shops they own.
async fn ensure_owns_shop(
    state: &AppState,
    user: &entity::users::Model,
    shop_id: i32,
) -> Result<(), AppError> {
    if user.role == Role::Admin.as_str() {
        return Ok(());
    }

    let shop = CrudRepository::<entity::prelude::Shops>::new(&state.db)
        .find_by_id(shop_id)
        .await?;

    match shop {
        Some(shop) if shop.owner_id == user.id => Ok(()),
        _ => Err(AppError::AuthErr(AuthError::AccessDenied {
            user_id: user.id,
            role: user.role.clone(),
            message: format!("not the owner of shop {shop_id}"),
        })),
    }
}

/// GET /api/shop-offices
pub async fn get_shop_offices(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let page = service(&state)
        .list(pagination.page, pagination.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<ShopOfficeDto>::from_page(page)),
    ))
}

/// GET /api/shop-offices/{id}
pub async fn get_shop_office(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let office = service(&state).get(id).await?;

    Ok((StatusCode::OK, Json(ShopOfficeDto::from(office))))
}

/// POST /api/shop-offices (owning SHOP or ADMIN)
pub async fn create_shop_office(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateShopOfficeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    ensure_owns_shop(&state, &user, dto.shop_id).await?;

    if dto.name.trim().is_empty() {
        return Err(AppError::BadRequest("Office name is required".to_string()));
    }

    let office = service(&state)
        .create(CreateShopOfficeParams::from_dto(dto))
        .await?;

    Ok((StatusCode::CREATED, Json(ShopOfficeDto::from(office))))
}

/// PATCH /api/shop-offices/{id} (owning SHOP or ADMIN)
pub async fn update_shop_office(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateShopOfficeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let office = service(&state).get(id).await?;
    ensure_owns_shop(&state, &user, office.shop_id).await?;

    let office = service(&state)
        .update(id, UpdateShopOfficeParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(ShopOfficeDto::from(office))))
}

/// DELETE /api/shop-offices/{id} (owning SHOP or ADMIN)
pub async fn delete_shop_office(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[Role::Shop, Role::Admin])
        .await?;

    let office = service(&state).get(id).await?;
    ensure_owns_shop(&state, &user, office.shop_id).await?;

    service(&state).remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
