use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response; the decode error is logged.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The token's subject no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token subject {0} not found")]
    UserNotFound(i32),

    /// The account exists but has not been activated yet.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Account {0} is not active")]
    AccountInactive(i32),

    /// The caller's role is not in the route's allowed role set.
    ///
    /// Results in a 403 Forbidden response. Role matching is exact: there
    /// is no hierarchy between ADMIN, SHOP and USER.
    #[error("User {user_id} with role {role} denied: {message}")]
    AccessDenied {
        user_id: i32,
        role: String,
        message: String,
    },

    /// Wrong email or password at login.
    ///
    /// Results in a 401 Unauthorized response with a deliberately vague
    /// message so the caller cannot probe which half was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All variants are logged at debug level; client-facing messages stay
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - missing/invalid token, unknown or inactive subject,
///   bad credentials
/// - 403 Forbidden - role mismatch
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        match self {
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
