use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::db::{FavoritePlanetModel, PlanetModel};

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new favorite planet entry for a user
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `planet_id` (`i32`): ID of the planet entry in the database
    ///
    /// # Returns
    /// - [`FavoritePlanetModel`]: The created association row
    /// - [`DbErr`]: Foreign key violation if the user or planet is missing, unique
    ///   constraint violation if the pair already exists
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, DbErr> {
        let favorite = entity::favorite_planets::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Get the association row for a user & planet pair
    pub async fn find(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanets::find()
            .filter(entity::favorite_planets::Column::UserId.eq(user_id))
            .filter(entity::favorite_planets::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    /// Deletes an association row by its ID, returning whether a row was removed
    pub async fn delete(&self, favorite_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoritePlanets::delete_by_id(favorite_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the planets favorited by a user, in the order they were favorited
    pub async fn get_planets_by_user_id(&self, user_id: i32) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::planet::Relation::FavoritePlanets.def(),
            )
            .filter(entity::favorite_planets::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planets::Column::Id)
            .all(self.db)
            .await
    }
}
