use sea_orm_migration::{prelude::*, schema::*};

// Favorites hold plain references to users & characters without an enforced foreign key,
// deleting either side leaves the favorite row in place.
static IDX_FAVORITES_CHARACTERS_USER_ID: &str = "idx-favorites_characters-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritesCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritesCharacters::Id))
                    .col(integer(FavoritesCharacters::UserId))
                    .col(integer(FavoritesCharacters::CharacterId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_CHARACTERS_USER_ID)
                    .table(FavoritesCharacters::Table)
                    .col(FavoritesCharacters::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_CHARACTERS_USER_ID)
                    .table(FavoritesCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritesCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritesCharacters {
    Table,
    Id,
    UserId,
    CharacterId,
}
