//! Route tests for the embedded comment endpoints.

mod support;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use support::{
    create_campsite, pine_lake, send, test_app, ADMIN_TOKEN, PAUL_TOKEN, RINGO_ID, RINGO_TOKEN,
};

async fn add_comment(app: &axum::Router, campsite_id: &str, token: &str, body: Value) -> Value {
    let response = send(
        app,
        Method::POST,
        &format!("/campsites/{campsite_id}/comments"),
        Some(token),
        Some(body),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn author_is_server_assigned_from_the_caller() {
    let app = test_app();
    let id = create_campsite(&app, pine_lake()).await;

    // The payload's author field must be ignored.
    add_comment(
        &app,
        &id,
        RINGO_TOKEN,
        json!({ "rating": 5, "text": "Slept like a log", "author": "someone-else" }),
    )
    .await;

    let listed = send(
        &app,
        Method::GET,
        &format!("/campsites/{id}/comments"),
        None,
        None,
    )
    .await;
    assert_eq!(listed.status, StatusCode::OK);
    let comments = listed.json();
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "Slept like a log");
    assert_eq!(comments[0]["author"]["id"], json!(RINGO_ID));
    assert_eq!(comments[0]["author"]["username"], "ringo");
}

#[tokio::test]
async fn listing_comments_of_missing_campsite_is_404() {
    let app = test_app();
    let response = send(&app, Method::GET, "/campsites/nope/comments", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["message"], "Campsite nope not found");
}

#[tokio::test]
async fn get_one_distinguishes_missing_campsite_and_comment() {
    let app = test_app();
    let id = create_campsite(&app, pine_lake()).await;

    let missing_campsite = send(
        &app,
        Method::GET,
        "/campsites/nope/comments/whatever",
        None,
        None,
    )
    .await;
    assert_eq!(missing_campsite.status, StatusCode::NOT_FOUND);
    assert_eq!(
        missing_campsite.json()["message"],
        "Campsite nope not found"
    );

    let missing_comment = send(
        &app,
        Method::GET,
        &format!("/campsites/{id}/comments/ghost"),
        None,
        None,
    )
    .await;
    assert_eq!(missing_comment.status, StatusCode::NOT_FOUND);
    assert_eq!(missing_comment.json()["message"], "Comment ghost not found");
}

#[tokio::test]
async fn only_the_author_can_update_or_delete_a_comment() {
    let app = test_app();
    let id = create_campsite(&app, pine_lake()).await;
    let campsite = add_comment(
        &app,
        &id,
        RINGO_TOKEN,
        json!({ "rating": 4, "text": "Windy but lovely" }),
    )
    .await;
    let comment_id = campsite["comments"][0]["id"].as_str().unwrap().to_string();
    let path = format!("/campsites/{id}/comments/{comment_id}");

    let foreign_update = send(
        &app,
        Method::PUT,
        &path,
        Some(PAUL_TOKEN),
        Some(json!({ "text": "hijacked" })),
    )
    .await;
    assert_eq!(foreign_update.status, StatusCode::FORBIDDEN);
    assert_eq!(
        foreign_update.json()["message"],
        "You are not authorized for this operation."
    );

    let foreign_delete = send(&app, Method::DELETE, &path, Some(PAUL_TOKEN), None).await;
    assert_eq!(foreign_delete.status, StatusCode::FORBIDDEN);

    // Unchanged after the rejected attempts.
    let fetched = send(&app, Method::GET, &path, None, None).await;
    assert_eq!(fetched.json()["text"], "Windy but lovely");

    let own_update = send(
        &app,
        Method::PUT,
        &path,
        Some(RINGO_TOKEN),
        Some(json!({ "text": "Windy but grand" })),
    )
    .await;
    assert_eq!(own_update.status, StatusCode::OK);
    let body = own_update.json();
    assert_eq!(body["comments"][0]["text"], "Windy but grand");
    // Partial update: rating untouched.
    assert_eq!(body["comments"][0]["rating"], json!(4));

    let own_delete = send(&app, Method::DELETE, &path, Some(RINGO_TOKEN), None).await;
    assert_eq!(own_delete.status, StatusCode::OK);
    assert_eq!(own_delete.json()["comments"], json!([]));
}

#[tokio::test]
async fn ownership_check_runs_after_existence_checks() {
    let app = test_app();
    // A non-owner probing a missing comment sees a 404, not a 403.
    let id = create_campsite(&app, pine_lake()).await;
    let response = send(
        &app,
        Method::DELETE,
        &format!("/campsites/{id}/comments/ghost"),
        Some(PAUL_TOKEN),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_all_comments_is_admin_only_and_keeps_the_campsite() {
    let app = test_app();
    let id = create_campsite(&app, pine_lake()).await;
    for text in ["first", "second", "third"] {
        add_comment(&app, &id, RINGO_TOKEN, json!({ "rating": 3, "text": text })).await;
    }
    let path = format!("/campsites/{id}/comments");

    let refused = send(&app, Method::DELETE, &path, Some(RINGO_TOKEN), None).await;
    assert_eq!(refused.status, StatusCode::FORBIDDEN);

    let cleared = send(&app, Method::DELETE, &path, Some(ADMIN_TOKEN), None).await;
    assert_eq!(cleared.status, StatusCode::OK);

    let listed = send(&app, Method::GET, &path, None, None).await;
    assert_eq!(listed.json(), json!([]));

    let still_there = send(&app, Method::GET, &format!("/campsites/{id}"), None, None).await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn unsupported_verbs_respond_with_fixed_messages() {
    let app = test_app();
    let id = create_campsite(&app, pine_lake()).await;

    let put_collection = send(
        &app,
        Method::PUT,
        &format!("/campsites/{id}/comments"),
        Some(RINGO_TOKEN),
        Some(json!({})),
    )
    .await;
    assert_eq!(put_collection.status, StatusCode::FORBIDDEN);
    assert_eq!(
        put_collection.text(),
        format!("PUT operation not supported on /campsites/{id}/comments")
    );

    let post_item = send(
        &app,
        Method::POST,
        &format!("/campsites/{id}/comments/some-comment"),
        Some(RINGO_TOKEN),
        Some(json!({})),
    )
    .await;
    assert_eq!(post_item.status, StatusCode::FORBIDDEN);
    assert_eq!(
        post_item.text(),
        format!("POST operation not supported on /campsites/{id}/comments/some-comment")
    );
}

#[tokio::test]
async fn adding_a_comment_requires_a_verified_identity() {
    let app = test_app();
    let id = create_campsite(&app, pine_lake()).await;
    let response = send(
        &app,
        Method::POST,
        &format!("/campsites/{id}/comments"),
        None,
        Some(json!({ "rating": 5, "text": "anonymous praise" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let app = test_app();
    let id = create_campsite(&app, pine_lake()).await;
    let response = send(
        &app,
        Method::POST,
        &format!("/campsites/{id}/comments"),
        Some(RINGO_TOKEN),
        Some(json!({ "rating": 9, "text": "off the scale" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
