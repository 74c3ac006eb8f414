use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::character::CreateCharacterDto;

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        character: CreateCharacterDto,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            birth_year: ActiveValue::Set(character.birth_year),
            hair_color: ActiveValue::Set(character.hair_color),
            gender: ActiveValue::Set(character.gender),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets every character matching the provided IDs, IDs without a character are skipped
    pub async fn get_many_by_ids(
        &self,
        character_ids: &[i32],
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(character_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Deletes a character
    ///
    /// Favorites referencing the character are not removed.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
