use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a character to a user's favorites
    ///
    /// No uniqueness check is made, calling this twice for the same pair stores two rows.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite_character::Model, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_character::Model>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the oldest favorite linking the user to the character
    pub async fn find_pair(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<entity::favorite_character::Model>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
