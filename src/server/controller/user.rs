use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        favorite::{UserFavoritesDto, UserFavoritesQuery},
        user::UserDto,
    },
    server::{
        controller::util::user_id::user_id_from_query, error::Error, model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List every user
///
/// Passwords are never included in the response.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users in storage order", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get the planets & characters a user has marked as favorites
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    params(UserFavoritesQuery),
    responses(
        (status = 200, description = "Favorites of the user, in the order they were added", body = UserFavoritesDto),
        (status = 400, description = "user_id query parameter missing", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Query(query): Query<UserFavoritesQuery>,
) -> Result<impl IntoResponse, Error> {
    let user_id = user_id_from_query(query.user_id.as_deref())?;

    let favorites = UserService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
