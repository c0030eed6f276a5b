use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// Favorites of a single user, in the order they were added
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub favorite_planets: Vec<PlanetDto>,
    pub favorite_characters: Vec<CharacterDto>,
}

/// Request body for adding or removing a favorite
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRequestDto {
    /// ID of the user the favorite belongs to
    pub user_id: Option<i32>,
}

/// Query parameters for retrieving a user's favorites
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFavoritesQuery {
    /// ID of the user whose favorites are returned
    #[param(value_type = Option<i32>)]
    pub user_id: Option<String>,
}
