//! Error responses produced through the router.

use axum::{body::Body, http::Request};
use tower::ServiceExt;

use super::*;

/// Expect 404 with an error body for each missing resource
#[tokio::test]
async fn missing_records_return_404() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test.into_app();

    for uri in ["/users/1", "/characters/1", "/planets/1"] {
        let resp = send(&app, "GET", uri).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {uri}");
        let body: Value = json_body(resp).await;
        assert!(body["error"].is_string(), "GET {uri}");
    }

    Ok(())
}

/// Expect 422 when a required field is missing
#[tokio::test]
async fn missing_field_returns_422() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test.into_app();

    let resp = send_json(
        &app,
        "POST",
        "/characters",
        json!({ "name": "Leia", "birth_year": "19BBY", "gender": "female" }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(resp).await;
    assert!(body["error"].as_str().unwrap_or_default().contains("hair_color"));

    let resp = send(&app, "GET", "/characters").await;
    let characters: Vec<Value> = json_body(resp).await;
    assert!(characters.is_empty());

    Ok(())
}

/// Expect 400 for a body that is not valid JSON
#[tokio::test]
async fn malformed_json_returns_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test.into_app();

    let request = Request::builder()
        .method("POST")
        .uri("/planets")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 415 when the body is not declared as JSON
#[tokio::test]
async fn missing_content_type_returns_415() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test.into_app();

    let resp = send(&app, "POST", "/users").await;

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = json_body(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect 409 when a username or email is reused
#[tokio::test]
async fn duplicate_user_returns_409() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .build()
        .await?;
    let app = test.into_app();

    let resp = send_json(
        &app,
        "POST",
        "/users",
        json!({
            "username": "skywalker",
            "email": factory::mock_email("luke"),
            "password": "p",
            "is_active": true,
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect the password to never be part of a user response
#[tokio::test]
async fn user_responses_omit_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .build()
        .await?;
    let app = test.into_app();

    let resp = send(&app, "GET", "/users/1").await;
    let user: Value = json_body(resp).await;
    assert!(user.get("password").is_none());

    let resp = send(&app, "GET", "/users").await;
    let users: Vec<Value> = json_body(resp).await;
    assert!(users.iter().all(|u| u.get("password").is_none()));

    Ok(())
}

/// Expect 404 when removing a favorite that was never added
#[tokio::test]
async fn remove_unknown_favorite_returns_404() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .with_mock_character("Leia")
        .build()
        .await?;
    let app = test.into_app();

    let resp = send(&app, "DELETE", "/users/1/favorites/characters/1").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn openapi_document_is_served() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test.into_app();

    let resp = send(&app, "GET", "/api/docs/openapi.json").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = json_body(resp).await;
    assert!(doc["paths"]["/users/{id}/favorites"].is_object());

    Ok(())
}

/// Expect 400 with an error body for an ID that is not an integer
#[tokio::test]
async fn non_integer_id_returns_json_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test.into_app();

    for (method, uri) in [
        ("GET", "/users/abc"),
        ("DELETE", "/planets/99999999999"),
        ("POST", "/users/1/favorites/characters/leia"),
    ] {
        let resp = send(&app, method, uri).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
        let body: Value = json_body(resp).await;
        assert!(body["error"].is_string(), "{method} {uri}");
    }

    Ok(())
}
