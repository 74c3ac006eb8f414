use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: String,
    pub climate: String,
    pub terrain: String,
}

/// Request body for creating a planet
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
        }
    }
}
