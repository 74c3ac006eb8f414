//! Tests for the user endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        api::MessageDto,
        user::{CreateUserDto, UserDto},
    },
    server::controller::user::{create_user, delete_user, get_user, list_users},
};

use super::*;

/// Expect 201 with the created user and without a password
#[tokio::test]
async fn create_returns_created_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let payload = CreateUserDto {
        username: "luke".to_string(),
        email: "luke@rebel.org".to_string(),
        password: "x".to_string(),
        is_active: true,
    };
    let result = create_user(State(test.into_app_state()), Ok(Json(payload))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "id": 1,
            "username": "luke",
            "email": "luke@rebel.org",
            "is_active": true,
        })
    );

    Ok(())
}

/// Expect 409 when the username is already taken
#[tokio::test]
async fn create_conflicts_for_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let payload = CreateUserDto {
        username: "luke".to_string(),
        email: "another@rebel.org".to_string(),
        password: "x".to_string(),
        is_active: false,
    };
    let result = create_user(State(test.into_app_state()), Ok(Json(payload))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with every user
#[tokio::test]
async fn list_returns_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .with_mock_user("leia")
        .with_mock_user("han")
        .build()
        .await?;

    let result = list_users(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<UserDto> = json_body(resp).await;
    assert_eq!(users.len(), 3);
    assert_eq!(users[2], UserDto::from(factory::mock_user_model(3, "han")));

    Ok(())
}

/// Expect 200 for an existing user
#[tokio::test]
async fn get_returns_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let result = get_user(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.username, "luke");

    Ok(())
}

/// Expect 404 for a user that was never created
#[tokio::test]
async fn get_not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_user(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with a message naming the deleted user
#[tokio::test]
async fn delete_returns_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .build()
        .await?;

    let result = delete_user(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = json_body(resp).await;
    assert_eq!(message.message, "User luke was successfully deleted");

    Ok(())
}

/// Expect 404 when deleting a user that does not exist
#[tokio::test]
async fn delete_not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = delete_user(State(test.into_app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when required tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_users(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
