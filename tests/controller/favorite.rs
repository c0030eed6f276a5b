use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use holocron::server::controller::favorite::{
    add_favorite_person, add_favorite_planet, delete_favorite_person, delete_favorite_planet,
};
use serde_json::json;

use super::*;

fn body(user_id: i32) -> Bytes {
    Bytes::from(json!({ "user_id": user_id }).to_string())
}

/// Expect 201 and exactly one association row
#[tokio::test]
async fn adds_favorite_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(5)
        .build()
        .await?;

    let (status, resp) =
        into_parts(add_favorite_planet(State(test.to_app_state()), Path(5), body(1)).await).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp, json!({ "msg": "Favorite planet added" }));
    assert_eq!(test.favorite().count_favorite_planets(1).await?, 1);

    Ok(())
}

/// Expect the second identical add to be rejected while the row count stays at 1
#[tokio::test]
async fn duplicate_favorite_planet_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(5)
        .build()
        .await?;

    let first =
        into_parts(add_favorite_planet(State(test.to_app_state()), Path(5), body(1)).await).await;
    let (status, resp) =
        into_parts(add_favorite_planet(State(test.to_app_state()), Path(5), body(1)).await).await;

    assert_eq!(first.0, StatusCode::CREATED);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({ "msg": "Planet already in favorites" }));
    assert_eq!(test.favorite().count_favorite_planets(1).await?, 1);

    Ok(())
}

/// Expect 400 and no mutation when the body has no user_id
#[tokio::test]
async fn add_favorite_planet_requires_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(5)
        .build()
        .await?;

    for request_body in [
        "",
        "{}",
        r#"{"user_id": null}"#,
        r#"{"user_id": 0}"#,
        "[1]",
        "user_id=1",
    ] {
        let (status, resp) = into_parts(
            add_favorite_planet(
                State(test.to_app_state()),
                Path(5),
                Bytes::from(request_body),
            )
            .await,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp, json!({ "msg": "user_id is required in JSON body" }));
    }
    assert_eq!(test.favorite().count_all_favorite_planets().await?, 0);

    Ok(())
}

/// Expect 404 when either the user or the planet does not exist
#[tokio::test]
async fn add_favorite_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(5)
        .build()
        .await?;

    let (user_status, user_resp) =
        into_parts(add_favorite_planet(State(test.to_app_state()), Path(5), body(2)).await).await;
    let (planet_status, planet_resp) =
        into_parts(add_favorite_planet(State(test.to_app_state()), Path(6), body(1)).await).await;

    assert_eq!(user_status, StatusCode::NOT_FOUND);
    assert_eq!(user_resp, json!({ "msg": "User not found" }));
    assert_eq!(planet_status, StatusCode::NOT_FOUND);
    assert_eq!(planet_resp, json!({ "msg": "Planet not found" }));
    assert_eq!(test.favorite().count_all_favorite_planets().await?, 0);

    Ok(())
}

/// Expect 201 for a new favorite character, then 400 for the duplicate
#[tokio::test]
async fn adds_favorite_person_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_character(3)
        .build()
        .await?;

    let (status, resp) =
        into_parts(add_favorite_person(State(test.to_app_state()), Path(3), body(1)).await).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp, json!({ "msg": "Favorite person added" }));

    let (status, resp) =
        into_parts(add_favorite_person(State(test.to_app_state()), Path(3), body(1)).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({ "msg": "Person already in favorites" }));

    assert_eq!(test.favorite().count_favorite_characters(1).await?, 1);

    Ok(())
}

/// Expect 404 when the character does not exist
#[tokio::test]
async fn add_favorite_person_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().with_mock_user(1).build().await?;

    let (status, resp) =
        into_parts(add_favorite_person(State(test.to_app_state()), Path(3), body(1)).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp, json!({ "msg": "Person not found" }));

    Ok(())
}

/// Expect 200 on the first removal and 404 on the second
#[tokio::test]
async fn deletes_favorite_planet_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(5)
        .with_favorite_planet(1, 5)
        .build()
        .await?;

    let (status, resp) =
        into_parts(delete_favorite_planet(State(test.to_app_state()), Path(5), body(1)).await)
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!({ "msg": "Favorite planet deleted" }));
    assert_eq!(test.favorite().count_favorite_planets(1).await?, 0);

    let (status, resp) =
        into_parts(delete_favorite_planet(State(test.to_app_state()), Path(5), body(1)).await)
            .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp, json!({ "msg": "Favorite planet not found" }));

    Ok(())
}

/// Expect 400 and the favorite kept when the body has no user_id
#[tokio::test]
async fn delete_favorite_planet_requires_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_planet(5)
        .with_favorite_planet(1, 5)
        .build()
        .await?;

    let (status, resp) = into_parts(
        delete_favorite_planet(State(test.to_app_state()), Path(5), Bytes::new()).await,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({ "msg": "user_id is required in JSON body" }));
    assert_eq!(test.favorite().count_favorite_planets(1).await?, 1);

    Ok(())
}

/// Expect 200 on the first removal and 404 on the second
#[tokio::test]
async fn deletes_favorite_person_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_user(1)
        .with_mock_character(3)
        .with_favorite_character(1, 3)
        .build()
        .await?;

    let (status, resp) =
        into_parts(delete_favorite_person(State(test.to_app_state()), Path(3), body(1)).await)
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!({ "msg": "Favorite person deleted" }));

    let (status, resp) =
        into_parts(delete_favorite_person(State(test.to_app_state()), Path(3), body(1)).await)
            .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp, json!({ "msg": "Favorite person not found" }));

    Ok(())
}
