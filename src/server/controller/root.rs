use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::OpenApi;

use crate::model::api::EndpointsDto;

pub static ROOT_TAG: &str = "root";

/// List every documented endpoint as `METHOD /path`
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Every endpoint of the API", body = EndpointsDto)
    ),
)]
pub async fn get_endpoints(Extension(endpoints): Extension<Arc<EndpointsDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(EndpointsDto::clone(&endpoints)))
}

/// Collects the endpoint listing from a generated OpenAPI document, ordered by path
pub fn list_endpoints(api: &OpenApi) -> EndpointsDto {
    let mut endpoints = Vec::new();

    for (path, item) in &api.paths.paths {
        let operations = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in operations {
            if operation.is_some() {
                endpoints.push(format!("{} {}", method, path));
            }
        }
    }

    EndpointsDto { endpoints }
}
