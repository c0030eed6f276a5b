
use holocron_test_utils::prelude::*;

use crate::server::{
    data::favorite::{character::FavoriteCharacterRepository, planet::FavoritePlanetRepository},
    error::{favorite::FavoriteError, resource::ResourceError, Error},
    service::favorite::{CharacterFavoritePair, FavoriteService, PlanetFavoritePair},
};
