//! Error types for the Holocron server application.
//!
//! This module provides the error handling system for the API. Domain errors are split by
//! concern (configuration, catalog lookups, favorites) and aggregated into a single [`Error`]
//! type. All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod exception;
pub mod favorite;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{
        config::ConfigError, exception::ApiException, favorite::FavoriteError,
        resource::ResourceError,
    },
};

/// Main error type for the Holocron server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type. `#[from]` enables automatic conversion via the `?` operator, and the
/// `IntoResponse` implementation maps each error to the HTTP response clients receive.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Resource errors (user, planet, or character lookups that found nothing)
/// - Favorite errors (missing user ID, duplicate or missing associations)
/// - Application exceptions (arbitrary message & status code)
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Requested user, planet, or character does not exist.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Favorite add or remove request was rejected.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Generic application exception with its own status code.
    #[error("{}", .0.message)]
    Exception(ApiException),
    /// Database error (query failures, connection issues, unexpected constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<ApiException> for Error {
    fn from(exception: ApiException) -> Self {
        Self::Exception(exception)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing user ID or duplicate favorite
/// - 404 Not Found - Missing user, planet, character, or favorite association
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::Exception(exception) => exception.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::new("Internal server error")),
        )
            .into_response()
    }
}
