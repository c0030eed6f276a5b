pub mod prelude;

pub mod characters;
pub mod favorite_characters;
pub mod favorite_planets;
pub mod planet;
pub mod user;
