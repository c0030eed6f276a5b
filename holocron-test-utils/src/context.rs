//! Test context structure and utilities.
//!
//! Provides the `TestContext` returned by `TestBuilder`. The context owns an in-memory SQLite
//! database and exposes fixture helpers for the user, catalog, and favorite tables.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_schema().with_mock_user(1).build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Insert additional rows mid-test
/// test.catalog().insert_mock_planet(5).await?;
/// test.favorite().insert_favorite_planet(1, 5).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to the server's `AppState` without a circular dependency
    /// between the test-utils crate and the main crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new test context backed by an empty in-memory SQLite database.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Run all migrations, creating every table with its constraints & indexes.
    pub(crate) async fn with_schema(&self) -> Result<(), TestError> {
        use migration::{Migrator, MigratorTrait};

        Migrator::up(&self.db, None).await?;

        Ok(())
    }

    /// Execute CREATE TABLE statements for custom tables.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
