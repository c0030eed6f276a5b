//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate to keep fixture signatures consistent.

pub type UserModel = entity::user::Model;

pub type PlanetModel = entity::planet::Model;

pub type CharacterModel = entity::characters::Model;

pub type FavoritePlanetModel = entity::favorite_planets::Model;

pub type FavoriteCharacterModel = entity::favorite_characters::Model;
