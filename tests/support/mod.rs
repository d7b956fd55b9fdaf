//! Shared helpers for exercising the router in-process.

// Not every test crate uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use campground_api::auth::StaticAuthGate;
use campground_api::db::RepositoryFactory;
use campground_api::http::{create_router, AppState};

pub const ADMIN_TOKEN: &str = "tok-admin";
pub const RINGO_TOKEN: &str = "tok-ringo";
pub const PAUL_TOKEN: &str = "tok-paul";

pub const RINGO_ID: &str = "u-ringo";
pub const PAUL_ID: &str = "u-paul";

/// The origin on the gated allow-list in test routers.
pub const LISTED_ORIGIN: &str = "http://localhost:3000";

/// Router backed by a fresh in-memory repository and a static token table.
pub fn test_app() -> Router {
    let auth = StaticAuthGate::new()
        .with_user(ADMIN_TOKEN, "u-admin", "site-admin", true)
        .with_user(RINGO_TOKEN, RINGO_ID, "ringo", false)
        .with_user(PAUL_TOKEN, PAUL_ID, "paul", false);
    let state = AppState::new(RepositoryFactory::create_local(), Arc::new(auth));
    create_router(state, vec![LISTED_ORIGIN.parse().unwrap()])
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("response body is not UTF-8")
    }
}

/// Send one request through the router.
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// A valid campsite creation payload.
pub fn pine_lake() -> Value {
    serde_json::json!({
        "name": "Pine Lake",
        "description": "Lakeside pines and quiet water",
        "image": "pine-lake.png",
        "elevation": 500,
        "cost": 25
    })
}

/// Create a campsite as admin and return its id.
pub async fn create_campsite(app: &Router, payload: Value) -> String {
    let response = send(
        app,
        Method::POST,
        "/campsites",
        Some(ADMIN_TOKEN),
        Some(payload),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()["id"].as_str().unwrap().to_string()
}
