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
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List every character
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let characters = character_service.get_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path.map_err(ApiError::from)?;
    let character_service = CharacterService::new(&state.db);

    let character = character_service.get_character(character_id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 422, description = "Request body is missing a field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(new_character) = payload.map_err(ApiError::from)?;
    let character_service = CharacterService::new(&state.db);

    let character = character_service.create_character(new_character).await?;

    Ok((StatusCode::CREATED, Json(character)))
}

/// Delete a character by ID
#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(character_id) = path.map_err(ApiError::from)?;
    let character_service = CharacterService::new(&state.db);

    let message = character_service.delete_character(character_id).await?;

    Ok((StatusCode::OK, Json(message)))
}
