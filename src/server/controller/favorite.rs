//! Endpoints adding & removing favorites.
//!
//! The user is identified by `user_id` in the JSON body for every method, including
//! `DELETE`. Bodies are read as raw bytes so that a missing or malformed body is reported
//! as a missing `user_id` instead of the default JSON extractor rejection.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::MessageDto, favorite::FavoriteRequestDto},
    server::{
        controller::util::user_id::user_id_from_body, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Favorite planet added", body = MessageDto),
        (status = 400, description = "user_id missing or planet already in favorites", body = MessageDto),
        (status = 404, description = "User or planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let user_id = user_id_from_body(&body)?;

    FavoriteService::new(&state.db)
        .add_favorite_planet(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Favorite planet added")),
    ))
}

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "Character ID")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Favorite person added", body = MessageDto),
        (status = 400, description = "user_id missing or person already in favorites", body = MessageDto),
        (status = 404, description = "User or person not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let user_id = user_id_from_body(&body)?;

    FavoriteService::new(&state.db)
        .add_favorite_character(user_id, people_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Favorite person added")),
    ))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite planet deleted", body = MessageDto),
        (status = 400, description = "user_id missing", body = MessageDto),
        (status = 404, description = "Favorite planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let user_id = user_id_from_body(&body)?;

    FavoriteService::new(&state.db)
        .remove_favorite_planet(user_id, planet_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite planet deleted"))))
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "Character ID")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite person deleted", body = MessageDto),
        (status = 400, description = "user_id missing", body = MessageDto),
        (status = 404, description = "Favorite person not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let user_id = user_id_from_body(&body)?;

    FavoriteService::new(&state.db)
        .remove_favorite_character(user_id, people_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Favorite person deleted"))))
}
