//! Tests for the planet endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        api::MessageDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::controller::planet::{create_planet, delete_planet, get_planet, list_planets},
};

use super::*;

/// Expect 201 with the created planet
#[tokio::test]
async fn create_returns_created_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let payload = CreatePlanetDto {
        name: "Tatooine".to_string(),
        population: "200000".to_string(),
        climate: "arid".to_string(),
        terrain: "desert".to_string(),
    };
    let result = create_planet(State(test.into_app_state()), Ok(Json(payload))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let planet: PlanetDto = json_body(resp).await;
    assert_eq!(
        planet,
        PlanetDto::from(factory::mock_planet_model(1, "Tatooine"))
    );

    Ok(())
}

/// Expect 200 with planets in creation order
#[tokio::test]
async fn list_returns_planets_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Alderaan")
        .build()
        .await?;

    let result = list_planets(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let planets: Vec<PlanetDto> = json_body(resp).await;
    let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Tatooine", "Alderaan"]);

    Ok(())
}

/// Expect 404 for a planet that does not exist
#[tokio::test]
async fn get_not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_planet(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with a message naming the deleted planet
#[tokio::test]
async fn delete_returns_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_planet("Alderaan")
        .build()
        .await?;

    let result = delete_planet(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = json_body(resp).await;
    assert_eq!(message.message, "Planet Alderaan was successfully deleted");

    Ok(())
}

/// Expect 404 when deleting a planet that does not exist
#[tokio::test]
async fn delete_not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = delete_planet(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
