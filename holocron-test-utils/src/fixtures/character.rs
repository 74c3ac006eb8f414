use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn character(&self) -> CharacterFixtures<'_> {
        CharacterFixtures { setup: self }
    }
}

pub struct CharacterFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CharacterFixtures<'a> {
    /// Insert a character built from [`factory::mock_character_model`]
    pub async fn insert_mock_character(
        &self,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        let character = factory::mock_character_model(0, name);

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(character.name),
                birth_year: ActiveValue::Set(character.birth_year),
                hair_color: ActiveValue::Set(character.hair_color),
                gender: ActiveValue::Set(character.gender),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
