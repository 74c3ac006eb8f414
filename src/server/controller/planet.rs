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
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path.map_err(ApiError::from)?;
    let planet = PlanetService::new(&state.db).get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 422, description = "Request body is missing a field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(new_planet) = payload.map_err(ApiError::from)?;

    let planet = PlanetService::new(&state.db)
        .create_planet(new_planet)
        .await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// Delete a planet by ID
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(planet_id) = path.map_err(ApiError::from)?;
    let message = PlanetService::new(&state.db)
        .delete_planet(planet_id)
        .await?;

    Ok((StatusCode::OK, Json(message)))
}
