use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn planet(&self) -> PlanetFixtures<'_> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PlanetFixtures<'a> {
    /// Insert a planet built from [`factory::mock_planet_model`]
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        let planet = factory::mock_planet_model(0, name);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(planet.name),
                population: ActiveValue::Set(planet.population),
                climate: ActiveValue::Set(planet.climate),
                terrain: ActiveValue::Set(planet.terrain),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
