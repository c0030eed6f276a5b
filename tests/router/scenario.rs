use axum::http::StatusCode;
use sea_orm::EntityTrait;
use serde_json::json;

use super::*;

/// Expect a favorite to appear after adding it and disappear after removing it
#[tokio::test]
async fn add_list_remove_favorite_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(5)
        .build()
        .await?;
    let user_body = r#"{"user_id": 1}"#;

    let added = send(&test, json_request("POST", "/favorite/planet/5", user_body)).await;
    assert_eq!(added.status(), StatusCode::CREATED);

    let favorites = send(&test, get("/users/favorites?user_id=1")).await;
    assert_eq!(favorites.status(), StatusCode::OK);
    let favorites = body_json(favorites).await;
    assert_eq!(favorites["favorite_planets"].as_array().unwrap().len(), 1);
    assert_eq!(favorites["favorite_planets"][0]["id"], 5);

    let deleted = send(&test, json_request("DELETE", "/favorite/planet/5", user_body)).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let favorites = body_json(send(&test, get("/users/favorites?user_id=1")).await).await;
    assert_eq!(
        favorites,
        json!({ "favorite_planets": [], "favorite_characters": [] })
    );

    Ok(())
}

/// Expect the same lifecycle for characters, with the second remove reporting 404
#[tokio::test]
async fn add_list_remove_favorite_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_character(2)
        .build()
        .await?;
    let user_body = r#"{"user_id": 1}"#;

    let added = send(&test, json_request("POST", "/favorite/people/2", user_body)).await;
    assert_eq!(added.status(), StatusCode::CREATED);

    let favorites = body_json(send(&test, get("/users/favorites?user_id=1")).await).await;
    assert_eq!(favorites["favorite_characters"][0]["name"], "Character 2");

    let deleted = send(&test, json_request("DELETE", "/favorite/people/2", user_body)).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let again = send(&test, json_request("DELETE", "/favorite/people/2", user_body)).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(again).await,
        json!({ "msg": "Favorite person not found" })
    );

    Ok(())
}

/// Expect deleting a planet to remove it from every user's favorites
#[tokio::test]
async fn deleted_planet_leaves_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_user(2)
        .with_mock_planet(5)
        .with_favorite_planet(1, 5)
        .with_favorite_planet(2, 5)
        .build()
        .await?;

    entity::prelude::Planet::delete_by_id(5)
        .exec(&test.db)
        .await?;

    assert!(!test.catalog().planet_exists(5).await?);
    assert_eq!(test.favorite().count_all_favorite_planets().await?, 0);

    let favorites = body_json(send(&test, get("/users/favorites?user_id=2")).await).await;
    assert_eq!(favorites["favorite_planets"], json!([]));

    Ok(())
}
