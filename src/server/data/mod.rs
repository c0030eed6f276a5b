//! Data access layer repositories.
//!
//! Repositories wrap single-table lookups, explicit join queries, and single-row inserts or
//! deletes. They are generic over [`sea_orm::ConnectionTrait`] so services can run them either
//! directly against the connection pool or inside a transaction. Every method returns plain
//! entity models; relationships are never traversed lazily.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
