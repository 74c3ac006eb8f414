use std::collections::HashMap;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::MessageDto,
        favorite::{FavoriteCharacterDto, FavoritePlanetDto, FavoritesDto},
    },
    server::{
        data::{
            character::CharacterRepository,
            favorite::{character::FavoriteCharacterRepository, planet::FavoritePlanetRepository},
            planet::PlanetRepository,
            user::UserRepository,
        },
        error::{api::ApiError, Error},
        model::db::{CharacterModel, PlanetModel, UserModel},
    },
};

/// Service for a user's favorite characters & planets.
///
/// Favorites are serialized with the username and the character or planet name resolved at
/// read time. References which no longer resolve are returned as `None`.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every favorite character & planet of a user.
    ///
    /// The user itself is not required to exist, an unknown user simply has no favorites.
    ///
    /// # Returns
    /// - `Ok(FavoritesDto)` - Favorites in insertion order, possibly empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<FavoritesDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let planet_repo = PlanetRepository::new(self.db);
        let favorite_character_repo = FavoriteCharacterRepository::new(self.db);
        let favorite_planet_repo = FavoritePlanetRepository::new(self.db);

        let favorite_characters = favorite_character_repo.get_by_user_id(user_id).await?;
        let favorite_planets = favorite_planet_repo.get_by_user_id(user_id).await?;

        if favorite_characters.is_empty() && favorite_planets.is_empty() {
            return Ok(FavoritesDto::default());
        }

        let username = user_repo.get_by_id(user_id).await?.map(|u| u.username);

        let character_ids: Vec<i32> = favorite_characters
            .iter()
            .map(|f| f.character_id)
            .collect();
        let character_names = names_by_id(
            character_repo.get_many_by_ids(&character_ids).await?,
            |c: CharacterModel| (c.id, c.name),
        );

        let planet_ids: Vec<i32> = favorite_planets.iter().map(|f| f.planet_id).collect();
        let planet_names = names_by_id(
            planet_repo.get_many_by_ids(&planet_ids).await?,
            |p: PlanetModel| (p.id, p.name),
        );

        let characters = favorite_characters
            .into_iter()
            .map(|favorite| {
                let character_name = character_names.get(&favorite.character_id).cloned();
                FavoriteCharacterDto::new(favorite, username.clone(), character_name)
            })
            .collect();

        let planets = favorite_planets
            .into_iter()
            .map(|favorite| {
                let planet_name = planet_names.get(&favorite.planet_id).cloned();
                FavoritePlanetDto::new(favorite, username.clone(), planet_name)
            })
            .collect();

        Ok(FavoritesDto {
            characters,
            planets,
        })
    }

    /// Adds a character to a user's favorites.
    ///
    /// Adding the same character twice stores a second favorite.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Confirmation naming the character & user
    /// - `Err(Error::ApiError(ApiError::NotFound))` - User or character does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<MessageDto, Error> {
        let user = self.find_user(user_id).await?;
        let character = self.find_character(character_id).await?;

        let favorite = FavoriteCharacterRepository::new(self.db)
            .create(user.id, character.id)
            .await?;

        tracing::debug!(
            favorite_id = %favorite.id,
            "Added character ID {} to favorites of user ID {}",
            character.id,
            user.id
        );

        Ok(MessageDto::new(format!(
            "Character {} added to favorites for user {}",
            character.name, user.username
        )))
    }

    /// Removes a character from a user's favorites.
    ///
    /// When the pair has been stored more than once only the oldest favorite is removed.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Confirmation naming the character & user
    /// - `Err(Error::ApiError(ApiError::NotFound))` - User or character does not exist
    /// - `Err(Error::ApiError(ApiError::FavoriteNotFound))` - Character is not a favorite of the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<MessageDto, Error> {
        let favorite_repo = FavoriteCharacterRepository::new(self.db);

        let user = self.find_user(user_id).await?;
        let character = self.find_character(character_id).await?;

        let Some(favorite) = favorite_repo.find_pair(user.id, character.id).await? else {
            return Err(ApiError::FavoriteNotFound {
                resource: "character",
                user_id,
                id: character_id,
            }
            .into());
        };

        if favorite_repo.delete(favorite.id).await?.rows_affected == 0 {
            return Err(ApiError::FavoriteNotFound {
                resource: "character",
                user_id,
                id: character_id,
            }
            .into());
        }

        Ok(MessageDto::new(format!(
            "Character {} removed from favorites for user {}",
            character.name, user.username
        )))
    }

    /// Adds a planet to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Confirmation naming the planet & user
    /// - `Err(Error::ApiError(ApiError::NotFound))` - User or planet does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<MessageDto, Error> {
        let user = self.find_user(user_id).await?;
        let planet = self.find_planet(planet_id).await?;

        let favorite = FavoritePlanetRepository::new(self.db)
            .create(user.id, planet.id)
            .await?;

        tracing::debug!(
            favorite_id = %favorite.id,
            "Added planet ID {} to favorites of user ID {}",
            planet.id,
            user.id
        );

        Ok(MessageDto::new(format!(
            "Planet {} added to favorites for user {}",
            planet.name, user.username
        )))
    }

    /// Removes a planet from a user's favorites, the oldest favorite for a duplicated pair
    pub async fn remove_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<MessageDto, Error> {
        let favorite_repo = FavoritePlanetRepository::new(self.db);

        let user = self.find_user(user_id).await?;
        let planet = self.find_planet(planet_id).await?;

        let Some(favorite) = favorite_repo.find_pair(user.id, planet.id).await? else {
            return Err(ApiError::FavoriteNotFound {
                resource: "planet",
                user_id,
                id: planet_id,
            }
            .into());
        };

        if favorite_repo.delete(favorite.id).await?.rows_affected == 0 {
            return Err(ApiError::FavoriteNotFound {
                resource: "planet",
                user_id,
                id: planet_id,
            }
            .into());
        }

        Ok(MessageDto::new(format!(
            "Planet {} removed from favorites for user {}",
            planet.name, user.username
        )))
    }

    async fn find_user(&self, user_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("User", user_id).into())
    }

    async fn find_character(&self, character_id: i32) -> Result<CharacterModel, Error> {
        CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Character", character_id).into())
    }

    async fn find_planet(&self, planet_id: i32) -> Result<PlanetModel, Error> {
        PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Planet", planet_id).into())
    }
}

fn names_by_id<M>(models: Vec<M>, id_and_name: impl Fn(M) -> (i32, String)) -> HashMap<i32, String> {
    models.into_iter().map(id_and_name).collect()
}
