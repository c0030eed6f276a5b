//! Declarative test builder.
//!
//! The builder pattern allows chaining multiple configuration methods together, with all
//! operations queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_schema: bool,
    tables: Vec<TableCreateStatement>,

    users: Vec<i32>,
    planets: Vec<i32>,
    characters: Vec<i32>,
    favorite_planets: Vec<(i32, i32)>,    // (user_id, planet_id)
    favorite_characters: Vec<(i32, i32)>, // (user_id, character_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no schema or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_schema: false,
            tables: Vec::new(),
            users: Vec::new(),
            planets: Vec::new(),
            characters: Vec::new(),
            favorite_planets: Vec::new(),
            favorite_characters: Vec::new(),
        }
    }

    /// Create every application table by running the real migrations.
    ///
    /// Unlike [`TestBuilder::with_table`], this includes the cascading foreign keys and the
    /// unique indexes on the favorite tables.
    pub fn with_schema(mut self) -> Self {
        self.include_schema = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user with the provided ID.
    pub fn with_mock_user(mut self, user_id: i32) -> Self {
        self.users.push(user_id);
        self
    }

    /// Insert a mock planet with the provided ID.
    pub fn with_mock_planet(mut self, planet_id: i32) -> Self {
        self.planets.push(planet_id);
        self
    }

    /// Insert a mock character with the provided ID.
    pub fn with_mock_character(mut self, character_id: i32) -> Self {
        self.characters.push(character_id);
        self
    }

    /// Mark a planet as a favorite of a user. Both must be added with the `with_mock_*` methods.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Mark a character as a favorite of a user. Both must be added with the `with_mock_*` methods.
    pub fn with_favorite_character(mut self, user_id: i32, character_id: i32) -> Self {
        self.favorite_characters.push((user_id, character_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates the schema (migrations, then custom tables)
    /// 2. Inserts users, planets, and characters
    /// 3. Inserts favorites in the order they were queued
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        if self.include_schema {
            setup.with_schema().await?;
        }
        setup.with_tables(self.tables).await?;

        // 2. Insert entity fixtures
        for user_id in self.users {
            setup.user().insert_mock_user(user_id).await?;
        }

        for planet_id in self.planets {
            setup.catalog().insert_mock_planet(planet_id).await?;
        }

        for character_id in self.characters {
            setup.catalog().insert_mock_character(character_id).await?;
        }

        // 3. Insert favorites
        for (user_id, planet_id) in self.favorite_planets {
            setup
                .favorite()
                .insert_favorite_planet(user_id, planet_id)
                .await?;
        }

        for (user_id, character_id) in self.favorite_characters {
            setup
                .favorite()
                .insert_favorite_character(user_id, character_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
