use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::MessageDto,
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        data::planet::PlanetRepository,
        error::{api::ApiError, Error},
    },
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        planet_repo
            .get_by_id(planet_id)
            .await?
            .map(PlanetDto::from)
            .ok_or_else(|| ApiError::not_found("Planet", planet_id).into())
    }

    pub async fn create_planet(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo.create(planet).await?;

        tracing::info!(planet_id = %planet.id, "Created planet {}", planet.name);

        Ok(PlanetDto::from(planet))
    }

    pub async fn delete_planet(&self, planet_id: i32) -> Result<MessageDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let Some(planet) = planet_repo.get_by_id(planet_id).await? else {
            return Err(ApiError::not_found("Planet", planet_id).into());
        };

        // A concurrent delete may have removed the record after the lookup
        if planet_repo.delete(planet.id).await?.rows_affected == 0 {
            return Err(ApiError::not_found("Planet", planet_id).into());
        }

        tracing::info!(planet_id = %planet.id, "Deleted planet {}", planet.name);

        Ok(MessageDto::new(format!(
            "Planet {} was successfully deleted",
            planet.name
        )))
    }
}
