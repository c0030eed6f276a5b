//! Repositories for the user ↔ planet and user ↔ character association tables.

pub mod character;
pub mod planet;
