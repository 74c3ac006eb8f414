use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoritesDto,
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Get every favorite character & planet of a user
///
/// The user is not required to exist, an unknown user has empty favorite lists.
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorites of the user", body = FavoritesDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(user_id) = path.map_err(ApiError::from)?;
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_user_favorites(user_id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/users/{id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID"),
    ),
    responses(
        (status = 201, description = "Character added to favorites", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, character_id)) = path.map_err(ApiError::from)?;
    let favorite_service = FavoriteService::new(&state.db);

    let message = favorite_service
        .add_favorite_character(user_id, character_id)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID"),
    ),
    responses(
        (status = 200, description = "Character removed from favorites", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User, character or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, character_id)) = path.map_err(ApiError::from)?;
    let favorite_service = FavoriteService::new(&state.db);

    let message = favorite_service
        .remove_favorite_character(user_id, character_id)
        .await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/users/{id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, planet_id)) = path.map_err(ApiError::from)?;
    let favorite_service = FavoriteService::new(&state.db);

    let message = favorite_service
        .add_favorite_planet(user_id, planet_id)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User, planet or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path((user_id, planet_id)) = path.map_err(ApiError::from)?;
    let favorite_service = FavoriteService::new(&state.db);

    let message = favorite_service
        .remove_favorite_planet(user_id, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(message)))
}
