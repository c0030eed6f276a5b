//! Server application core modules.
//!
//! HTTP routing, request handling, business logic, and persistence for the Holocron API.
//! Requests flow from `controller` through `service` into `data`, and every layer reports
//! failures through the shared `error` types.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
