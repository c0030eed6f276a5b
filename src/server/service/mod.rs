//! Service layer for business logic.
//!
//! Services validate request preconditions, coordinate repositories, and convert database
//! models into API DTOs. Mutating operations run inside a single database transaction so a
//! request either applies exactly one change or none at all.

pub mod catalog;
pub mod favorite;
pub mod user;
