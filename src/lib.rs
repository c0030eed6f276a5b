//! Holocron: browse Star Wars planets & characters and manage per-user favorites over a
//! JSON REST API.

pub mod model;
pub mod server;
