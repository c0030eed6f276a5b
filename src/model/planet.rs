use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i32>,
    pub terrain: Option<String>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(model: entity::planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            population: model.population,
            terrain: model.terrain,
        }
    }
}
