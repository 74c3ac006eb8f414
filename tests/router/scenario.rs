//! A complete walk through users, characters and favorites.

use super::*;

/// Expect a user & character created over HTTP to show up as a resolved favorite
#[tokio::test]
async fn user_favorites_a_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test.into_app();

    let resp = send_json(
        &app,
        "POST",
        "/users",
        json!({
            "username": "luke",
            "email": "l@x.io",
            "password": "p",
            "is_active": true,
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: Value = json_body(resp).await;
    assert_eq!(
        user,
        json!({ "id": 1, "username": "luke", "email": "l@x.io", "is_active": true })
    );

    let resp = send_json(
        &app,
        "POST",
        "/characters",
        json!({
            "name": "Leia",
            "birth_year": "19BBY",
            "hair_color": "brown",
            "gender": "female",
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&app, "POST", "/users/1/favorites/characters/1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let message: Value = json_body(resp).await;
    assert!(message["message"].as_str().unwrap_or_default().contains("Leia"));

    let resp = send(&app, "GET", "/users/1/favorites").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Value = json_body(resp).await;
    assert_eq!(
        favorites,
        json!({
            "characters": [{
                "id": 1,
                "user_id": 1,
                "username": "luke",
                "character_id": 1,
                "character_name": "Leia",
            }],
            "planets": [],
        })
    );

    Ok(())
}

/// Expect a planet favorite to be removable and the list to be empty afterwards
#[tokio::test]
async fn user_adds_and_removes_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("leia")
        .with_mock_planet("Alderaan")
        .build()
        .await?;
    let app = test.into_app();

    let resp = send(&app, "POST", "/users/1/favorites/planets/1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&app, "DELETE", "/users/1/favorites/planets/1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let message: Value = json_body(resp).await;
    assert_eq!(
        message,
        json!({ "message": "Planet Alderaan removed from favorites for user leia" })
    );

    let resp = send(&app, "GET", "/users/1/favorites").await;
    let favorites: Value = json_body(resp).await;
    assert_eq!(favorites, json!({ "characters": [], "planets": [] }));

    Ok(())
}

/// Expect favorites to outlive the deleted character with a null name
#[tokio::test]
async fn deleted_character_leaves_dangling_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("luke")
        .with_mock_character("Leia")
        .build()
        .await?;
    let app = test.into_app();

    let resp = send(&app, "POST", "/users/1/favorites/characters/1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&app, "DELETE", "/characters/1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "GET", "/users/1/favorites").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Value = json_body(resp).await;
    assert_eq!(favorites["characters"][0]["character_id"], json!(1));
    assert_eq!(favorites["characters"][0]["character_name"], Value::Null);
    assert_eq!(favorites["characters"][0]["username"], json!("luke"));

    Ok(())
}

/// Expect every created record to be listed and deleted records to disappear
#[tokio::test]
async fn list_reflects_creates_and_deletes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = test.into_app();

    for name in ["Tatooine", "Alderaan", "Hoth"] {
        let resp = send_json(
            &app,
            "POST",
            "/planets",
            json!({
                "name": name,
                "population": "unknown",
                "climate": "temperate",
                "terrain": "grasslands",
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = send(&app, "GET", "/planets").await;
    let planets: Vec<Value> = json_body(resp).await;
    assert_eq!(planets.len(), 3);

    let resp = send(&app, "DELETE", "/planets/2").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "GET", "/planets").await;
    let planets: Vec<Value> = json_body(resp).await;
    let ids: Vec<i64> = planets.iter().filter_map(|p| p["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 3]);

    let resp = send(&app, "GET", "/planets/2").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
