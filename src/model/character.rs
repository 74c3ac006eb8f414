use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub hair_color: String,
    pub gender: String,
}

/// Request body for creating a character
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    pub name: String,
    pub gender: String,
    pub birth_year: String,
    pub hair_color: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            birth_year: character.birth_year,
            hair_color: character.hair_color,
            gender: character.gender,
        }
    }
}
