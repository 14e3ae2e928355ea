use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{
            ChangePasswordDto, CheckCodeDto, LoginDto, RetryActiveDto, RetryPasswordDto,
            SignupDto, TokenDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// The account starts inactive; the activation code is delivered out of
/// band and must be confirmed via `/api/auth/check-code`.
///
/// # Returns
/// - `201 Created` - Account created, activation pending
/// - `400 Bad Request` - Invalid email/password or email already taken
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created, activation pending", body = UserDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(dto): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);
    let user = service.signup(dto).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Exchange credentials for a bearer token.
///
/// # Returns
/// - `200 OK` - Token plus the authenticated user
/// - `401 Unauthorized` - Wrong credentials or inactive account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Authenticated", body = TokenDto),
        (status = 401, description = "Wrong credentials or inactive account", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);
    let (token, user) = service.login(dto).await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            user: UserDto::from(user),
        }),
    ))
}

/// POST /api/auth/check-code
/// Activate an account with the emailed code.
pub async fn check_code(
    State(state): State<AppState>,
    Json(dto): Json<CheckCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);
    let user = service.check_code(&dto.email, &dto.code).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// POST /api/auth/retry-active
/// Re-issue the activation code for a not-yet-active account.
pub async fn retry_active(
    State(state): State<AppState>,
    Json(dto): Json<RetryActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);
    service.retry_active(&dto.email).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/auth/retry-password
/// Replace a forgotten password with a temporary one.
pub async fn retry_password(
    State(state): State<AppState>,
    Json(dto): Json<RetryPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);
    service.retry_password(&dto.email).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/auth/change-password
/// Change the caller's password (old password required).
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    let service = AuthService::new(&state.db, &state.jwt);
    service.change_password(user, dto).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/profile
/// The caller's own user record.
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers, &state.jwt)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
