//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /users`, `POST /users`
/// - `GET /users/{id}`, `DELETE /users/{id}`
/// - `GET /characters`, `POST /characters`
/// - `GET /characters/{id}`, `DELETE /characters/{id}`
/// - `GET /planets`, `POST /planets`
/// - `GET /planets/{id}`, `DELETE /planets/{id}`
/// - `GET /users/{id}/favorites`
/// - `POST /users/{id}/favorites/characters/{character_id}`, `DELETE` on the same path
/// - `POST /users/{id}/favorites/planets/{planet_id}`, `DELETE` on the same path
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given its state.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorite routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::character::list_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::planet::list_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
