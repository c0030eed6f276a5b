use sea_orm::DatabaseConnection;

use crate::{
    model::{character::CharacterDto, planet::PlanetDto},
    server::{
        data::{character::CharacterRepository, planet::PlanetRepository},
        error::{resource::ResourceError, Error},
    },
};

/// Read-only access to the planets and characters ("people") catalog.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every character in storage order
    pub async fn list_people(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Gets a single character
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Character found
    /// - `Err(Error::ResourceError(ResourceError::PersonNotFound))` - No character with the ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_person(&self, character_id: i32) -> Result<CharacterDto, Error> {
        CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .map(CharacterDto::from)
            .ok_or_else(|| ResourceError::PersonNotFound(character_id).into())
    }

    /// Lists every planet in storage order
    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Gets a single planet
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet found
    /// - `Err(Error::ResourceError(ResourceError::PlanetNotFound))` - No planet with the ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .map(PlanetDto::from)
            .ok_or_else(|| ResourceError::PlanetNotFound(planet_id).into())
    }
}
