use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a single user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path.map_err(ApiError::from)?;
    let user_service = UserService::new(&state.db);

    let user = user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Create a user
///
/// The password is stored but never returned.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 409, description = "Username or email already in use", body = ErrorDto),
        (status = 422, description = "Request body is missing a field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(new_user) = payload.map_err(ApiError::from)?;
    let user_service = UserService::new(&state.db);

    let user = user_service.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete a user by ID
///
/// Favorites belonging to the user are left in place.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path.map_err(ApiError::from)?;
    let user_service = UserService::new(&state.db);

    let message = user_service.delete_user(user_id).await?;

    Ok((StatusCode::OK, Json(message)))
}
