//! CORS behavior: open mode for reads, gated mode for mutations, and
//! pre-flight handling ahead of the auth gate.

mod support;

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

use support::{test_app, LISTED_ORIGIN};

const UNLISTED_ORIGIN: &str = "http://elsewhere.example";

async fn preflight(path: &str, origin: &str, requested_method: &str) -> axum::response::Response {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(path)
        .header(ORIGIN, origin)
        .header(ACCESS_CONTROL_REQUEST_METHOD, requested_method)
        .body(Body::empty())
        .unwrap();
    test_app().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn preflight_for_a_read_reflects_any_origin() {
    let response = preflight("/campsites", UNLISTED_ORIGIN, "GET").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        UNLISTED_ORIGIN
    );
}

#[tokio::test]
async fn preflight_for_a_mutation_is_gated_by_the_allow_list() {
    let denied = preflight("/campsites", UNLISTED_ORIGIN, "DELETE").await;
    assert_eq!(denied.status(), StatusCode::OK);
    assert!(!denied.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));

    let granted = preflight("/campsites", LISTED_ORIGIN, "DELETE").await;
    assert_eq!(granted.status(), StatusCode::OK);
    assert_eq!(
        granted.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        LISTED_ORIGIN
    );
}

#[tokio::test]
async fn preflight_never_reaches_the_auth_gate() {
    // /favorites requires a verified identity, but the pre-flight carries no
    // credential and must still get its empty 200.
    let response = preflight("/favorites", LISTED_ORIGIN, "POST").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn actual_read_requests_get_the_open_grant() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/campsites")
        .header(ORIGIN, UNLISTED_ORIGIN)
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        UNLISTED_ORIGIN
    );
}

#[tokio::test]
async fn same_origin_mutations_proceed_without_a_grant() {
    // An unlisted origin is denied the cross-origin grant, but the request
    // itself still executes.
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/favorites")
        .header(ORIGIN, UNLISTED_ORIGIN)
        .header(
            axum::http::header::AUTHORIZATION,
            format!("Bearer {}", support::RINGO_TOKEN),
        )
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!response
        .headers()
        .contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));
}
