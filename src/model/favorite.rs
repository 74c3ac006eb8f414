use serde::{Deserialize, Serialize};

/// A user's favorite character with the user & character names resolved at read time
///
/// `username` and `character_name` are `null` when the referenced record no longer exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub character_id: i32,
    pub character_name: Option<String>,
}

/// A user's favorite planet with the user & planet names resolved at read time
///
/// `username` and `planet_name` are `null` when the referenced record no longer exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub planet_id: i32,
    pub planet_name: Option<String>,
}

/// All favorites belonging to a single user
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritesDto {
    pub characters: Vec<FavoriteCharacterDto>,
    pub planets: Vec<FavoritePlanetDto>,
}

impl FavoriteCharacterDto {
    pub fn new(
        favorite: entity::favorite_character::Model,
        username: Option<String>,
        character_name: Option<String>,
    ) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            username,
            character_id: favorite.character_id,
            character_name,
        }
    }
}

impl FavoritePlanetDto {
    pub fn new(
        favorite: entity::favorite_planet::Model,
        username: Option<String>,
        planet_name: Option<String>,
    ) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            username,
            planet_id: favorite.planet_id,
            planet_name,
        }
    }
}
