//! Server application models and type definitions.
//!
//! Contains the application state shared by all handlers and type aliases for the
//! database entity models.

pub mod app;
pub mod db;
