use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::db::{CharacterModel, FavoriteCharacterModel};

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new favorite character entry for a user
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `character_id` (`i32`): ID of the character entry in the database
    ///
    /// # Returns
    /// - [`FavoriteCharacterModel`]: The created association row
    /// - [`DbErr`]: Foreign key violation if the user or character is missing, unique
    ///   constraint violation if the pair already exists
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::favorite_characters::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Get the association row for a user & character pair
    pub async fn find(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacters::find()
            .filter(entity::favorite_characters::Column::UserId.eq(user_id))
            .filter(entity::favorite_characters::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Deletes an association row by its ID, returning whether a row was removed
    pub async fn delete(&self, favorite_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoriteCharacters::delete_by_id(favorite_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the characters favorited by a user, in the order they were favorited
    pub async fn get_characters_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Characters::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::characters::Relation::FavoriteCharacters.def(),
            )
            .filter(entity::favorite_characters::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_characters::Column::Id)
            .all(self.db)
            .await
    }
}
