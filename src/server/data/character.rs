use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::CharacterModel;

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all characters in storage order
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Characters::find()
            .order_by_asc(entity::characters::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Characters::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Deletes a character along with every favorite referencing it
    pub async fn delete(&self, character_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Characters::delete_by_id(character_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
