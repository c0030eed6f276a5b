//! Public API representations shared by controllers and services.
//!
//! These DTOs are the serialized shape of every response body. Database models never
//! leave the server layer directly; they are projected into these types first, which is
//! where sensitive columns such as a user's password are dropped.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
