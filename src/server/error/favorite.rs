use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::exception::ApiException;

/// Rejections of favorite add & remove requests.
///
/// Duplicate favorites are reported with `400 Bad Request` rather than `409 Conflict`
/// to keep the status codes clients of this API already rely on.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("user_id is required in JSON body")]
    MissingBodyUserId,
    #[error("user_id is required as a query parameter")]
    MissingQueryUserId,
    #[error("Planet ID {planet_id} is already a favorite of user ID {user_id}")]
    PlanetAlreadyFavorited { user_id: i32, planet_id: i32 },
    #[error("Character ID {character_id} is already a favorite of user ID {user_id}")]
    CharacterAlreadyFavorited { user_id: i32, character_id: i32 },
    #[error("Planet ID {planet_id} is not a favorite of user ID {user_id}")]
    FavoritePlanetNotFound { user_id: i32, planet_id: i32 },
    #[error("Character ID {character_id} is not a favorite of user ID {user_id}")]
    FavoriteCharacterNotFound { user_id: i32, character_id: i32 },
}

impl From<FavoriteError> for ApiException {
    fn from(err: FavoriteError) -> Self {
        let status = match err {
            FavoriteError::MissingBodyUserId
            | FavoriteError::MissingQueryUserId
            | FavoriteError::PlanetAlreadyFavorited { .. }
            | FavoriteError::CharacterAlreadyFavorited { .. } => StatusCode::BAD_REQUEST,
            FavoriteError::FavoritePlanetNotFound { .. }
            | FavoriteError::FavoriteCharacterNotFound { .. } => StatusCode::NOT_FOUND,
        };

        let message = match err {
            FavoriteError::MissingBodyUserId | FavoriteError::MissingQueryUserId => err.to_string(),
            FavoriteError::PlanetAlreadyFavorited { .. } => "Planet already in favorites".into(),
            FavoriteError::CharacterAlreadyFavorited { .. } => "Person already in favorites".into(),
            FavoriteError::FavoritePlanetNotFound { .. } => "Favorite planet not found".into(),
            FavoriteError::FavoriteCharacterNotFound { .. } => {
                "Favorite person not found".into()
            }
        };

        ApiException::new(status, message)
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("Favorite request rejected: {}", self);

        ApiException::from(self).into_response()
    }
}
