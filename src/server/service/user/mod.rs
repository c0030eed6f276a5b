//! User service layer.
//!
//! Business logic for user accounts: listing users, resolving a user's favorites through
//! explicit join queries, and deleting users together with their favorites.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        character::CharacterDto, favorite::UserFavoritesDto, planet::PlanetDto, user::UserDto,
    },
    server::{
        data::{
            favorite::{character::FavoriteCharacterRepository, planet::FavoritePlanetRepository},
            user::UserRepository,
        },
        error::{resource::ResourceError, Error},
    },
};

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user in storage order, without passwords
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Retrieves the planets & characters a user has marked as favorites.
    ///
    /// Each list follows the order the favorites were added in.
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - Favorites of the user, possibly empty
    /// - `Err(Error::ResourceError(ResourceError::UserNotFound))` - No user with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        let favorite_planets = FavoritePlanetRepository::new(self.db)
            .get_planets_by_user_id(user_id)
            .await?;
        let favorite_characters = FavoriteCharacterRepository::new(self.db)
            .get_characters_by_user_id(user_id)
            .await?;

        Ok(UserFavoritesDto {
            favorite_planets: favorite_planets.into_iter().map(PlanetDto::from).collect(),
            favorite_characters: favorite_characters
                .into_iter()
                .map(CharacterDto::from)
                .collect(),
        })
    }

    /// Deletes a user along with all of their favorites.
    ///
    /// The favorites are removed by the cascading foreign keys in the same statement as the
    /// user row.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - No user with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let deleted = UserRepository::new(self.db).delete(user_id).await?;

        if deleted {
            tracing::info!(user_id = %user_id, "Deleted user and their favorites");
        }

        Ok(deleted)
    }
}
