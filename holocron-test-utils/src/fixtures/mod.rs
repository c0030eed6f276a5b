//! Test fixture modules for database row creation.
//!
//! - `factory` - In-memory model instances with standard test values
//! - `user` - User rows
//! - `catalog` - Planet and character rows
//! - `favorite` - Favorite association rows and counts

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
