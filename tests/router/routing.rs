use axum::http::StatusCode;
use serde_json::json;

use super::*;

/// Expect a trailing slash to reach the same handler
#[tokio::test]
async fn trailing_slash_is_trimmed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_character(1)
        .build()
        .await?;

    let with_slash = send(&test, get("/people/")).await;
    let one_with_slash = send(&test, get("/people/1/")).await;

    assert_eq!(with_slash.status(), StatusCode::OK);
    assert_eq!(body_json(with_slash).await.as_array().unwrap().len(), 1);
    assert_eq!(one_with_slash.status(), StatusCode::OK);

    Ok(())
}

/// Expect the root to list every endpoint of the API
#[tokio::test]
async fn root_lists_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let resp = send(&test, get("/")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let endpoints: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();

    for expected in [
        "GET /",
        "GET /people",
        "GET /people/{id}",
        "GET /planets",
        "GET /planets/{id}",
        "GET /users",
        "GET /users/favorites",
        "POST /favorite/planet/{planet_id}",
        "DELETE /favorite/planet/{planet_id}",
        "POST /favorite/people/{people_id}",
        "DELETE /favorite/people/{people_id}",
    ] {
        assert!(endpoints.contains(&expected), "missing {}", expected);
    }
    assert_eq!(endpoints.len(), 11);

    Ok(())
}

/// Expect the OpenAPI document to be served next to Swagger UI
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(&test, get("/api/docs/openapi.json")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], "Holocron");
    assert!(body["paths"]["/favorite/planet/{planet_id}"]["delete"].is_object());

    Ok(())
}

/// Expect 400 and no mutation for a favorite request without a body
#[tokio::test]
async fn favorite_without_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(1)
        .build()
        .await?;

    let resp = send(&test, json_request("POST", "/favorite/planet/1", "")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "user_id is required in JSON body" })
    );
    assert_eq!(test.favorite().count_all_favorite_planets().await?, 0);

    Ok(())
}

/// Expect 404 with only a message for a missing character
#[tokio::test]
async fn unknown_person_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let resp = send(&test, get("/people/42")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "msg": "Person not found" }));

    Ok(())
}

/// Expect the query string to be read by the favorites endpoint
#[tokio::test]
async fn user_favorites_reads_query_string() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_user(1).build().await?;

    let missing = send(&test, get("/users/favorites")).await;
    let found = send(&test, get("/users/favorites?user_id=1")).await;

    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(
        body_json(found).await,
        json!({ "favorite_planets": [], "favorite_characters": [] })
    );

    Ok(())
}

/// Expect a non-integer path ID to be rejected before reaching the handler
#[tokio::test]
async fn non_integer_path_id_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let resp = send(&test, get("/planets/tatooine")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
