use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, character::CharacterDto},
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static PEOPLE_TAG: &str = "people";

/// List every character
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All characters in storage order", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = CatalogService::new(&state.db).list_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a single character by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "Person not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_one_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = CatalogService::new(&state.db).get_person(id).await?;

    Ok((StatusCode::OK, Json(person)))
}
