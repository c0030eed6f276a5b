use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use holocron::server::controller::planet::{get_all_planets, get_one_planet};
use serde_json::json;

use super::*;

/// Expect every planet in ID order
#[tokio::test]
async fn lists_all_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_planet(1)
        .with_mock_planet(5)
        .build()
        .await?;

    let (status, body) = into_parts(get_all_planets(State(test.to_app_state())).await).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Planet 1", "Planet 5"]);

    Ok(())
}

/// Expect the serialized planet
#[tokio::test]
async fn gets_one_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_planet(5)
        .build()
        .await?;

    let (status, body) = into_parts(get_one_planet(State(test.to_app_state()), Path(5)).await).await;

    let planet = factory::mock_planet_model(5);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 5,
            "name": planet.name,
            "climate": planet.climate,
            "population": planet.population,
            "terrain": planet.terrain,
        })
    );

    Ok(())
}

/// Expect unset planet details to be serialized as null
#[tokio::test]
async fn serializes_missing_details_as_null() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    test.catalog()
        .insert_planet_without_details(3, "Hoth")
        .await?;

    let (status, body) = into_parts(get_one_planet(State(test.to_app_state()), Path(3)).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 3,
            "name": "Hoth",
            "climate": null,
            "population": null,
            "terrain": null,
        })
    );

    Ok(())
}

/// Expect 404 for a planet that does not exist
#[tokio::test]
async fn planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let (status, body) = into_parts(get_one_planet(State(test.to_app_state()), Path(1)).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Planet not found" }));

    Ok(())
}
