//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate.

/// A user account. `username` & `email` are unique.
pub type UserModel = entity::user::Model;

/// A character record.
pub type CharacterModel = entity::character::Model;

/// A planet record.
pub type PlanetModel = entity::planet::Model;

/// Link between a user and a favorited character.
///
/// References are not enforced, either side may have been deleted since the favorite
/// was created.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Link between a user and a favorited planet.
pub type FavoritePlanetModel = entity::favorite_planet::Model;
