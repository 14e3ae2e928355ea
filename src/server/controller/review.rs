use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::PaginatedDto,
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::review::{CreateReviewParams, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct ReviewListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub product_id: Option<i32>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

fn service(state: &AppState) -> ReviewService<'_> {
    ReviewService::new(&state.db, state.storage.clone())
}

/// GET /api/reviews
/// Public; optionally filtered by product.
pub async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = service(&state)
        .list(query.product_id, query.page, query.per_page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedDto::<ReviewDto> {
            items: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }),
    ))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let review = service(&state).get(id).await?;

    Ok((StatusCode::OK, Json(review)))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let review = service(&state)
        .create(CreateReviewParams::from_dto(user.id, dto))
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// PATCH /api/reviews/{id}
/// Author or admin.
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let review_service = service(&state);
    let review = review_service.get_model(id).await?;

    if user.role != Role::Admin.as_str() && review.user_id != user.id {
        return Err(AppError::NotFound(format!("review {id} not found")));
    }

    let review = review_service
        .update(id, UpdateReviewParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(review)))
}

/// DELETE /api/reviews/{id}
/// Author or admin.
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let review_service = service(&state);
    let review = review_service.get_model(id).await?;

    if user.role != Role::Admin.as_str() && review.user_id != user.id {
        return Err(AppError::NotFound(format!("review {id} not found")));
    }

    review_service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
