use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261018_000001_create_user_table::User,
    m20261018_000003_create_characters_table::Characters,
};

static IDX_FAVORITE_CHARACTERS_USER_CHARACTER: &str =
    "idx-favorite_characters-user_id-character_id";
static FK_FAVORITE_CHARACTERS_USER_ID: &str = "fk-favorite_characters-user_id";
static FK_FAVORITE_CHARACTERS_CHARACTER_ID: &str = "fk-favorite_characters-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacters::Id))
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer(FavoriteCharacters::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTERS_USER_ID)
                            .from(FavoriteCharacters::Table, FavoriteCharacters::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTERS_CHARACTER_ID)
                            .from(FavoriteCharacters::Table, FavoriteCharacters::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTERS_USER_CHARACTER)
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::UserId)
                    .col(FavoriteCharacters::CharacterId)
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
                    .name(IDX_FAVORITE_CHARACTERS_USER_CHARACTER)
                    .table(FavoriteCharacters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacters {
    Table,
    Id,
    UserId,
    CharacterId,
}
