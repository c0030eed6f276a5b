use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use holocron::server::controller::people::{get_all_people, get_one_person};
use serde_json::json;

use super::*;

/// Expect every character in ID order
#[tokio::test]
async fn lists_all_people_in_id_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_character(2)
        .with_mock_character(1)
        .build()
        .await?;

    let (status, body) = into_parts(get_all_people(State(test.to_app_state())).await).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Expect an empty list when there are no characters
#[tokio::test]
async fn lists_no_people() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let (status, body) = into_parts(get_all_people(State(test.to_app_state())).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

/// Expect the serialized character
#[tokio::test]
async fn gets_one_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_character(4)
        .build()
        .await?;

    let (status, body) =
        into_parts(get_one_person(State(test.to_app_state()), Path(4)).await).await;

    let character = factory::mock_character_model(4);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 4,
            "name": character.name,
            "height": character.height,
            "weight": character.weight,
        })
    );

    Ok(())
}

/// Expect 404 with only a message for a character that does not exist
#[tokio::test]
async fn person_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_character(1)
        .build()
        .await?;

    let (status, body) =
        into_parts(get_one_person(State(test.to_app_state()), Path(99)).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Person not found" }));

    Ok(())
}

/// Expect 500 with a generic message when the tables are missing
#[tokio::test]
async fn database_error_is_internal_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = into_parts(get_all_people(State(test.to_app_state())).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "msg": "Internal server error" }));

    Ok(())
}
