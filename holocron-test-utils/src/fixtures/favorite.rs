use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel},
    TestContext,
};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(
            entity::prelude::FavoritePlanets::insert(entity::favorite_planets::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(entity::prelude::FavoriteCharacters::insert(
            entity::favorite_characters::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Number of favorite planet rows belonging to a user
    pub async fn count_favorite_planets(&self, user_id: i32) -> Result<u64, TestError> {
        Ok(entity::prelude::FavoritePlanets::find()
            .filter(entity::favorite_planets::Column::UserId.eq(user_id))
            .count(&self.setup.db)
            .await?)
    }

    /// Number of favorite planet rows across all users
    pub async fn count_all_favorite_planets(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::FavoritePlanets::find()
            .count(&self.setup.db)
            .await?)
    }

    /// Number of favorite character rows belonging to a user
    pub async fn count_favorite_characters(&self, user_id: i32) -> Result<u64, TestError> {
        Ok(entity::prelude::FavoriteCharacters::find()
            .filter(entity::favorite_characters::Column::UserId.eq(user_id))
            .count(&self.setup.db)
            .await?)
    }
}
