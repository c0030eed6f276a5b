//! Shared test utilities for the Holocron workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the schema and fixtures, and
//! `build()` returns a [`TestContext`] wrapping an in-memory SQLite database with helper
//! accessors for inserting and inspecting rows during the test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
