pub use super::characters::Entity as Characters;
pub use super::favorite_characters::Entity as FavoriteCharacters;
pub use super::favorite_planets::Entity as FavoritePlanets;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
