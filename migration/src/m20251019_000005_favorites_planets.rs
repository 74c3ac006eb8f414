use sea_orm_migration::{prelude::*, schema::*};

// Favorites hold plain references to users & planets without an enforced foreign key,
// deleting either side leaves the favorite row in place.
static IDX_FAVORITES_PLANETS_USER_ID: &str = "idx-favorites_planets-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritesPlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritesPlanets::Id))
                    .col(integer(FavoritesPlanets::UserId))
                    .col(integer(FavoritesPlanets::PlanetId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_PLANETS_USER_ID)
                    .table(FavoritesPlanets::Table)
                    .col(FavoritesPlanets::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_PLANETS_USER_ID)
                    .table(FavoritesPlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritesPlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritesPlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}
