//! Helpers shared by the integration tests.

use axum::{body::Body, http::Request, response::Response, Router};
use holocron::server::{model::app::AppState, startup};
use holocron_test_utils::TestContext;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// Extension trait for TestContext to create the application state & router
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
    fn into_app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn into_app(&self) -> Router {
        startup::build_app(self.into_app_state())
    }
}

/// Reads a response body as JSON
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}

/// Sends a request without a body through the router
pub async fn send(app: &Router, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Sends a request with a JSON body through the router
pub async fn send_json(app: &Router, method: &str, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}
