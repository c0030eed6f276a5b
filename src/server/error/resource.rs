use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::exception::ApiException;

/// Lookups of a single user, planet, or character that found nothing.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Character ID {0} not found")]
    PersonNotFound(i32),
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
}

impl From<ResourceError> for ApiException {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::PersonNotFound(_) => ApiException::not_found("Person not found"),
            ResourceError::PlanetNotFound(_) => ApiException::not_found("Planet not found"),
            ResourceError::UserNotFound(_) => ApiException::not_found("User not found"),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        ApiException::from(self).into_response()
    }
}
