use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::MessageDto;

/// Application exception carrying an arbitrary message and HTTP status code.
///
/// Domain errors that are meant to reach the client are converted into this type so
/// every failure is serialized the same way: the status code plus a `{"msg": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiException {
    pub status: StatusCode,
    pub message: String,
}

impl ApiException {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Serialized body of the exception
    pub fn to_dto(&self) -> MessageDto {
        MessageDto::new(self.message.clone())
    }
}

impl IntoResponse for ApiException {
    fn into_response(self) -> Response {
        (self.status, Json(self.to_dto())).into_response()
    }
}
