use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261018_000001_create_user_table::User, m20261018_000002_create_planet_table::Planet,
};

static IDX_FAVORITE_PLANETS_USER_PLANET: &str = "idx-favorite_planets-user_id-planet_id";
static FK_FAVORITE_PLANETS_USER_ID: &str = "fk-favorite_planets-user_id";
static FK_FAVORITE_PLANETS_PLANET_ID: &str = "fk-favorite_planets-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table can also be created on SQLite,
        // which does not support adding constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanets::Id))
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANETS_USER_ID)
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANETS_PLANET_ID)
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_PLANETS_USER_PLANET)
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::UserId)
                    .col(FavoritePlanets::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_PLANETS_USER_PLANET)
                    .table(FavoritePlanets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}
