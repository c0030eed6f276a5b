//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use std::sync::Arc;

use axum::{Extension, Router};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Listing of every endpoint below
/// - `GET /people`, `GET /people/{id}` - Characters
/// - `GET /planets`, `GET /planets/{id}` - Planets
/// - `GET /users` - Users
/// - `GET /users/favorites?user_id=` - A user's favorite planets & characters
/// - `POST | DELETE /favorite/planet/{planet_id}` - Add or remove a favorite planet
/// - `POST | DELETE /favorite/people/{people_id}` - Add or remove a favorite character
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::root::ROOT_TAG, description = "API index"),
        (name = controller::people::PEOPLE_TAG, description = "Character catalog"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog"),
        (name = controller::user::USER_TAG, description = "Users and their favorites"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite management"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::root::get_endpoints))
        .routes(routes!(controller::people::get_all_people))
        .routes(routes!(controller::people::get_one_person))
        .routes(routes!(controller::planet::get_all_planets))
        .routes(routes!(controller::planet::get_one_planet))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::delete_favorite_person
        ))
        .split_for_parts();

    let endpoints = Arc::new(controller::root::list_endpoints(&api));

    routes
        .layer(Extension(endpoints))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete service: routes bound to `state`, request tracing, and trailing
/// slash trimming
///
/// Path normalization has to run before routing, so it wraps the router instead of being
/// added as a router layer. Serve the result with
/// `ServiceExt::<Request>::into_make_service`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
