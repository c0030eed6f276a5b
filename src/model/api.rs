use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message body returned for errors and for favorite mutations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable message
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Listing of every documented endpoint, served at the API root
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointsDto {
    /// Entries formatted as `METHOD /path`
    pub endpoints: Vec<String>,
}
