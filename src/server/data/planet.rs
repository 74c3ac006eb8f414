use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::planet::CreatePlanetDto;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, planet: CreatePlanetDto) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            population: ActiveValue::Set(planet.population),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(
        &self,
        planet_ids: &[i32],
    ) -> Result<Vec<entity::planet::Model>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Deletes a planet, check [`DeleteResult::rows_affected`] to confirm it existed
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
