//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the server so type
//! signatures don't need to spell out the `entity` crate module paths.

/// User account. The `password` column is stored but never serialized.
pub type UserModel = entity::user::Model;

/// Planet that users can mark as a favorite.
pub type PlanetModel = entity::planet::Model;

/// Character ("person") that users can mark as a favorite.
pub type CharacterModel = entity::characters::Model;

/// Association row linking a user to a favorite planet.
///
/// # Fields (from `entity::favorite_planets::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the user, cascades on delete
/// - `planet_id` - Foreign key to the planet, cascades on delete
pub type FavoritePlanetModel = entity::favorite_planets::Model;

/// Association row linking a user to a favorite character.
///
/// # Fields (from `entity::favorite_characters::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the user, cascades on delete
/// - `character_id` - Foreign key to the character, cascades on delete
pub type FavoriteCharacterModel = entity::favorite_characters::Model;
