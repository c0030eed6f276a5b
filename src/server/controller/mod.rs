//! HTTP controller endpoints for the Holocron web API.
//!
//! Axum handlers for the catalog, users, and favorites. Controllers extract request inputs,
//! call into the service layer, and map results to status codes. Every handler is annotated
//! for the OpenAPI document served at `/api/docs`.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod root;
pub mod user;
pub mod util;
