use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub weight: i32,
}

impl From<entity::characters::Model> for CharacterDto {
    fn from(model: entity::characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            weight: model.weight,
        }
    }
}
