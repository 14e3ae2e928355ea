//! Error types and HTTP response handling.
//!
//! The `AppError` enum is the top-level error type returned by every service
//! and controller. It wraps domain-specific errors and implements
//! `IntoResponse` so handlers can bubble errors with `?` and still produce a
//! well-formed JSON body. Low-level causes are logged server-side; clients
//! only ever see the classification and a short message.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        carrier::CarrierError,
        error::{auth::AuthError, config::ConfigError},
        storage::StorageError,
    },
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur while serving a request and
/// provides the conversion to HTTP responses. Persistence and carrier
/// failures are deliberately collapsed into coarse classifications: callers
/// cannot distinguish a duplicate key from a lost connection, only the
/// server log can.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Object storage error.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Shipping carrier API error.
    ///
    /// Mapped to 400 Bad Request: the caller's request could not be turned
    /// into carrier packages. The carrier's own message is logged only.
    #[error(transparent)]
    CarrierErr(#[from] CarrierError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest` and carrier failures
/// - 404 Not Found - `NotFound`
/// - 401/403 - delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else, with details logged
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::CarrierErr(err) => {
                tracing::error!("Carrier error: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Shipping carrier request failed".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper for converting any displayable error into a 500 response.
///
/// Logs the full error message and returns a generic body so internal
/// details never leak to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
