// tests/e2e_publish.rs
use axum::http::StatusCode;
use tower::util::ServiceExt as _;

mod support;
use support::{
    bearer_token, body_json, post_json, publish_payload, seed_post, spawn_app, spawn_racy_app,
};

#[tokio::test]
async fn publish_returns_201_with_base_slug_and_first_id() {
    let app = spawn_app().await;
    let token = bearer_token(&app).await;

    let resp = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/v1/posts",
            &publish_payload("Bitcoin Rally Continues"),
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["post"]["slug"], "bitcoin-rally-continues");
    assert_eq!(json["post"]["id"], 1);
    assert_eq!(json["post"]["likes"], 0);
    assert_eq!(json["post"]["dislikes"], 0);
    assert_eq!(json["post"]["featured"], false);
}

#[tokio::test]
async fn publish_defaults_the_author_when_absent() {
    let app = spawn_app().await;
    let token = bearer_token(&app).await;

    let resp = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/v1/posts",
            &publish_payload("Bitcoin Rally Continues"),
            Some(&token),
        ))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["post"]["author"], "Editorial Team");
}

#[tokio::test]
async fn publish_appends_suffix_when_base_slug_is_taken() {
    let app = spawn_app().await;
    let token = bearer_token(&app).await;
    seed_post(&app.store, 7, "Bitcoin Rally Continues", "bitcoin-rally-continues").await;

    let resp = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/v1/posts",
            &publish_payload("Bitcoin Rally Continues"),
            Some(&token),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["post"]["slug"], "bitcoin-rally-continues-2");
    assert_eq!(json["post"]["id"], 8);
}

#[tokio::test]
async fn explicit_slug_override_is_collision_resolved_too() {
    let app = spawn_app().await;
    let token = bearer_token(&app).await;
    seed_post(&app.store, 1, "Old Breaking News", "breaking-news").await;

    let mut payload = publish_payload("Something Entirely Different");
    payload["slug"] = "breaking-news".into();

    let resp = app
        .router
        .clone()
        .oneshot(post_json("/api/v1/posts", &payload, Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["post"]["slug"], "breaking-news-2");
}

#[tokio::test]
async fn validation_failure_returns_400_before_any_write() {
    let app = spawn_app().await;
    let token = bearer_token(&app).await;

    // Three-character title is below the four-character floor.
    let payload = publish_payload("abc");

    let resp = app
        .router
        .clone()
        .oneshot(post_json("/api/v1/posts", &payload, Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn publish_requires_a_bearer_token() {
    let app = spawn_app().await;

    let resp = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/v1/posts",
            &publish_payload("Bitcoin Rally Continues"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(app.store.is_empty());
}

/// Two publishes with the same title race through the read-then-write
/// window: the store's unique slug constraint arbitrates, so exactly one
/// succeeds and the other surfaces a conflict. No retry happens.
#[tokio::test]
async fn racing_identical_titles_yield_one_created_and_one_conflict() {
    let app = spawn_racy_app().await;
    let token = bearer_token(&app).await;

    let first = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/v1/posts",
            &publish_payload("Bitcoin Rally Continues"),
            Some(&token),
        ))
        .await
        .unwrap();
    let second = app
        .router
        .clone()
        .oneshot(post_json(
            "/api/v1/posts",
            &publish_payload("Bitcoin Rally Continues"),
            Some(&token),
        ))
        .await
        .unwrap();

    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.slugs(), vec!["bitcoin-rally-continues"]);
}
