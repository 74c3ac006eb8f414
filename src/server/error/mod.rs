//! Error types for the Holocron server application.
//!
//! This module provides the error hierarchy used by repositories, services and controllers.
//! Domain-specific errors (API request failures, configuration) live in submodules and are
//! aggregated into [`Error`]. All errors implement `IntoResponse` for Axum HTTP responses and
//! use `thiserror` for their `Display` and `Error` implementations.

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{api::ApiError, config::ConfigError},
};

/// Main error type for the Holocron server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type so the `?` operator can be used throughout services and controllers. The
/// `IntoResponse` implementation maps errors to HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Error caused by the request itself (missing records, invalid bodies, conflicts).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Request errors carry their own status code, every other error is treated as an internal
/// server error and logged.
///
/// # Returns
/// - 400 / 415 / 422 - For request bodies that could not be deserialized
/// - 404 Not Found - For missing users, characters, planets or favorites
/// - 409 Conflict - For duplicate unique values
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
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
