use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors caused by the request rather than by the server.
///
/// Each variant maps to a 4xx response with an [`ErrorDto`] body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No record of the given resource exists with the requested ID.
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    /// The user has no favorite of the given resource with the requested ID.
    #[error("Favorite {resource} with ID {id} not found for user ID {user_id}")]
    FavoriteNotFound {
        resource: &'static str,
        user_id: i32,
        id: i32,
    },
    /// The record would violate a uniqueness constraint.
    #[error("{0}")]
    Conflict(String),
    /// The request body was missing, malformed, or lacked a required field.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
    /// A path parameter could not be parsed, such as a non-integer ID.
    #[error(transparent)]
    InvalidPath(#[from] PathRejection),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::FavoriteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::InvalidPath(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("Request error: {}", self);

        let status = self.status();
        let error = match self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            Self::InvalidPath(rejection) => rejection.body_text(),
            err => err.to_string(),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
