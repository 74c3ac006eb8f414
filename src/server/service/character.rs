use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::MessageDto,
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        data::character::CharacterRepository,
        error::{api::ApiError, Error},
    },
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo.get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a single character, `ApiError::NotFound` if it does not exist
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_id(character_id).await? {
            Some(character) => Ok(CharacterDto::from(character)),
            None => Err(ApiError::not_found("Character", character_id).into()),
        }
    }

    pub async fn create_character(
        &self,
        character: CreateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo.create(character).await?;

        tracing::info!(character_id = %character.id, "Created character {}", character.name);

        Ok(CharacterDto::from(character))
    }

    /// Deletes a character, favorites referencing the character are kept
    pub async fn delete_character(&self, character_id: i32) -> Result<MessageDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let Some(character) = character_repo.get_by_id(character_id).await? else {
            return Err(ApiError::not_found("Character", character_id).into());
        };

        // A concurrent delete may have removed the record after the lookup
        if character_repo.delete(character.id).await?.rows_affected == 0 {
            return Err(ApiError::not_found("Character", character_id).into());
        }

        tracing::info!(character_id = %character.id, "Deleted character {}", character.name);

        Ok(MessageDto::new(format!(
            "Character {} was successfully deleted",
            character.name
        )))
    }
}
