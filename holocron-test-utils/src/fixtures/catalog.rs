use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CharacterModel, PlanetModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a planet using the values of [`factory::mock_planet_model`]
    pub async fn insert_mock_planet(&self, planet_id: i32) -> Result<PlanetModel, TestError> {
        let planet = factory::mock_planet_model(planet_id);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                id: ActiveValue::Set(planet.id),
                name: ActiveValue::Set(planet.name),
                climate: ActiveValue::Set(planet.climate),
                population: ActiveValue::Set(planet.population),
                terrain: ActiveValue::Set(planet.terrain),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a planet with only a name, leaving every nullable column empty
    pub async fn insert_planet_without_details(
        &self,
        planet_id: i32,
        name: &str,
    ) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                id: ActiveValue::Set(planet_id),
                name: ActiveValue::Set(name.to_string()),
                climate: ActiveValue::Set(None),
                population: ActiveValue::Set(None),
                terrain: ActiveValue::Set(None),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a character using the values of [`factory::mock_character_model`]
    pub async fn insert_mock_character(
        &self,
        character_id: i32,
    ) -> Result<CharacterModel, TestError> {
        let character = factory::mock_character_model(character_id);

        Ok(
            entity::prelude::Characters::insert(entity::characters::ActiveModel {
                id: ActiveValue::Set(character.id),
                name: ActiveValue::Set(character.name),
                height: ActiveValue::Set(character.height),
                weight: ActiveValue::Set(character.weight),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn planet_exists(&self, planet_id: i32) -> Result<bool, TestError> {
        Ok(entity::prelude::Planet::find_by_id(planet_id)
            .one(&self.setup.db)
            .await?
            .is_some())
    }

    pub async fn character_exists(&self, character_id: i32) -> Result<bool, TestError> {
        Ok(entity::prelude::Characters::find_by_id(character_id)
            .one(&self.setup.db)
            .await?
            .is_some())
    }
}
