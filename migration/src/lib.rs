pub use sea_orm_migration::prelude::*;

mod m20251019_000001_user;
mod m20251019_000002_characters;
mod m20251019_000003_planets;
mod m20251019_000004_favorites_characters;
mod m20251019_000005_favorites_planets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_user::Migration),
            Box::new(m20251019_000002_characters::Migration),
            Box::new(m20251019_000003_planets::Migration),
            Box::new(m20251019_000004_favorites_characters::Migration),
            Box::new(m20251019_000005_favorites_planets::Migration),
        ]
    }
}
