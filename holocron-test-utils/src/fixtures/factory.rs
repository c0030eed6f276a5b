//! Factory functions for generating mock database models.
//!
//! Pure functions returning models with standard test values derived from the ID. Fixture
//! helpers insert exactly these values, so tests can compare against the factory output.

use crate::model::{CharacterModel, PlanetModel, UserModel};

pub fn mock_user_model(user_id: i32) -> UserModel {
    UserModel {
        id: user_id,
        username: format!("user{}", user_id),
        email: format!("user{}@holocron.test", user_id),
        password: "hunter2".to_string(),
        first_name: "Leia".to_string(),
        last_name: format!("Organa {}", user_id),
    }
}

pub fn mock_planet_model(planet_id: i32) -> PlanetModel {
    PlanetModel {
        id: planet_id,
        name: format!("Planet {}", planet_id),
        climate: Some("temperate".to_string()),
        population: Some(200_000),
        terrain: Some("grasslands, mountains".to_string()),
    }
}

pub fn mock_character_model(character_id: i32) -> CharacterModel {
    CharacterModel {
        id: character_id,
        name: format!("Character {}", character_id),
        height: 172,
        weight: 77,
    }
}
