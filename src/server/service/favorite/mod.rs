//! Favorite service layer.
//!
//! Adds and removes the association rows linking a user to favorite planets and characters.
//! Each operation is one transaction: preconditions are checked, exactly one row is inserted
//! or deleted, and the transaction is committed. Returning early drops the transaction,
//! which rolls it back.
//!
//! The pre-insert duplicate check is backed by unique indexes on the association tables, so
//! an insert that loses a race with a concurrent identical request fails with a unique
//! constraint violation. That failure is reported the same way as the pre-check.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        character::CharacterRepository,
        favorite::{character::FavoriteCharacterRepository, planet::FavoritePlanetRepository},
        planet::PlanetRepository,
        user::UserRepository,
    },
    error::{favorite::FavoriteError, resource::ResourceError, Error},
    model::db::{FavoriteCharacterModel, FavoritePlanetModel},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a planet as a favorite of a user
    ///
    /// # Returns
    /// - `Ok(FavoritePlanetModel)`: The created association row
    /// - `Err(Error::ResourceError(UserNotFound | PlanetNotFound))`: User or planet does not exist
    /// - `Err(Error::FavoriteError(PlanetAlreadyFavorited))`: Pair is already a favorite
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        if PlanetRepository::new(&txn)
            .get_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::PlanetNotFound(planet_id).into());
        }

        let favorite_repo = FavoritePlanetRepository::new(&txn);
        let pair = PlanetFavoritePair {
            user_id,
            planet_id,
        };

        if favorite_repo.find(user_id, planet_id).await?.is_some() {
            return Err(pair.duplicate());
        }

        let favorite = favorite_repo
            .create(user_id, planet_id)
            .await
            .map_err(|e| pair.map_insert_err(e))?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            planet_id = %planet_id,
            "Added favorite planet"
        );

        Ok(favorite)
    }

    /// Marks a character as a favorite of a user
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterModel)`: The created association row
    /// - `Err(Error::ResourceError(UserNotFound | PersonNotFound))`: User or character does not exist
    /// - `Err(Error::FavoriteError(CharacterAlreadyFavorited))`: Pair is already a favorite
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        if CharacterRepository::new(&txn)
            .get_by_id(character_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::PersonNotFound(character_id).into());
        }

        let favorite_repo = FavoriteCharacterRepository::new(&txn);
        let pair = CharacterFavoritePair {
            user_id,
            character_id,
        };

        if favorite_repo.find(user_id, character_id).await?.is_some() {
            return Err(pair.duplicate());
        }

        let favorite = favorite_repo
            .create(user_id, character_id)
            .await
            .map_err(|e| pair.map_insert_err(e))?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            character_id = %character_id,
            "Added favorite character"
        );

        Ok(favorite)
    }

    /// Removes a planet from a user's favorites
    ///
    /// # Returns
    /// - `Ok(())`: The association row was deleted
    /// - `Err(Error::FavoriteError(FavoritePlanetNotFound))`: The planet is not a favorite of the user
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn remove_favorite_planet(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoritePlanetRepository::new(&txn);
        let not_found = FavoriteError::FavoritePlanetNotFound { user_id, planet_id };

        let Some(favorite) = favorite_repo.find(user_id, planet_id).await? else {
            return Err(not_found.into());
        };

        // A concurrent remove may have deleted the row after it was found
        if !favorite_repo.delete(favorite.id).await? {
            return Err(not_found.into());
        }

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            planet_id = %planet_id,
            "Removed favorite planet"
        );

        Ok(())
    }

    /// Removes a character from a user's favorites
    ///
    /// # Returns
    /// - `Ok(())`: The association row was deleted
    /// - `Err(Error::FavoriteError(FavoriteCharacterNotFound))`: The character is not a favorite of the user
    /// - `Err(Error::DbErr)`: Database operation failed
    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteCharacterRepository::new(&txn);
        let not_found = FavoriteError::FavoriteCharacterNotFound {
            user_id,
            character_id,
        };

        let Some(favorite) = favorite_repo.find(user_id, character_id).await? else {
            return Err(not_found.into());
        };

        if !favorite_repo.delete(favorite.id).await? {
            return Err(not_found.into());
        }

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            character_id = %character_id,
            "Removed favorite character"
        );

        Ok(())
    }
}

/// Maps failures of a favorite planet insert onto the API's error kinds
struct PlanetFavoritePair {
    user_id: i32,
    planet_id: i32,
}

impl PlanetFavoritePair {
    fn duplicate(&self) -> Error {
        FavoriteError::PlanetAlreadyFavorited {
            user_id: self.user_id,
            planet_id: self.planet_id,
        }
        .into()
    }

    /// A foreign key violation means the user or planet was deleted after it was checked,
    /// it is reported as the planet missing.
    fn map_insert_err(&self, err: DbErr) -> Error {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => self.duplicate(),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ResourceError::PlanetNotFound(self.planet_id).into()
            }
            _ => err.into(),
        }
    }
}

/// Maps failures of a favorite character insert onto the API's error kinds
struct CharacterFavoritePair {
    user_id: i32,
    character_id: i32,
}

impl CharacterFavoritePair {
    fn duplicate(&self) -> Error {
        FavoriteError::CharacterAlreadyFavorited {
            user_id: self.user_id,
            character_id: self.character_id,
        }
        .into()
    }

    fn map_insert_err(&self, err: DbErr) -> Error {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => self.duplicate(),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ResourceError::PersonNotFound(self.character_id).into()
            }
            _ => err.into(),
        }
    }
}
