//! Authentication gate and request validation tests.
//!
//! These run against a server whose database pool is never connected, which
//! proves that token checks and payload validation happen before storage is
//! touched.

mod common;

use auth::TokenService;
use chrono::Duration;
use common::TestApp;
use common::TEST_JWT_SECRET;
use reqwest::StatusCode;
use serde_json::json;

/// Mint a token signed with the test secret
fn issue_token(ttl_minutes: i64) -> String {
    TokenService::new(TEST_JWT_SECRET, Duration::minutes(ttl_minutes))
        .issue(&uuid::Uuid::new_v4().to_string())
        .expect("Failed to issue token")
}

/// Flip one character in the middle of the payload segment
fn tamper(token: &str) -> String {
    let payload_start = token.find('.').expect("Token has no payload segment") + 1;
    let mut bytes = token.as_bytes().to_vec();
    let index = payload_start + 4;
    bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
    String::from_utf8(bytes).expect("Tampered token is not valid UTF-8")
}

#[tokio::test]
async fn test_protected_routes_reject_missing_token() {
    let app = TestApp::spawn_without_db().await;

    let routes = [
        ("POST", "/tweets"),
        ("GET", "/tweets"),
        ("GET", "/tweets/search?keyword=rust"),
        ("GET", "/tweets/page/1"),
        ("POST", "/follow"),
        ("POST", "/unfollow"),
    ];

    for (method, path) in routes {
        let request = match method {
            "GET" => app.get(path),
            _ => app.post(path),
        };

        let response = request.send().await.expect("Failed to execute request");

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{} {} let an unauthenticated request through",
            method,
            path
        );

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["data"]["message"], "Invalid or missing credentials");
    }
}

#[tokio::test]
async fn test_malformed_token_rejected() {
    let app = TestApp::spawn_without_db().await;

    let response = app
        .get_authenticated("/tweets", "not-a-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid or missing credentials");
}

#[tokio::test]
async fn test_wrong_scheme_rejected() {
    let app = TestApp::spawn_without_db().await;

    let response = app
        .get("/tweets")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::spawn_without_db().await;

    let expired = issue_token(-30);

    let response = app
        .get_authenticated("/tweets", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid or missing credentials");
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let app = TestApp::spawn_without_db().await;

    let tampered = tamper(&issue_token(15));

    let response = app
        .get_authenticated("/tweets", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = TestApp::spawn_without_db().await;

    let foreign = TokenService::new(b"a-completely-different-signing-secret", Duration::minutes(15))
        .issue(&uuid::Uuid::new_v4().to_string())
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/tweets", &foreign)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_with_non_uuid_subject_rejected() {
    let app = TestApp::spawn_without_db().await;

    let token = TokenService::new(TEST_JWT_SECRET, Duration::minutes(15))
        .issue("not-a-uuid")
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/tweets", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rejection_body_is_identical_across_reasons() {
    let app = TestApp::spawn_without_db().await;

    // Missing header, garbage token, expired token, tampered token
    let responses = vec![
        app.get("/tweets").send().await,
        app.get_authenticated("/tweets", "garbage").send().await,
        app.get_authenticated("/tweets", &issue_token(-30)).send().await,
        app.get_authenticated("/tweets", &tamper(&issue_token(15)))
            .send()
            .await,
    ];

    let expected = json!({
        "status_code": 401,
        "data": { "message": "Invalid or missing credentials" }
    });

    for response in responses {
        let response = response.expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, expected, "rejection body leaks the failure reason");
    }
}

#[tokio::test]
async fn test_register_rejects_short_username() {
    let app = TestApp::spawn_without_db().await;

    let response = app
        .post("/register")
        .json(&json!({
            "username": "x",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 3 characters"));
}

#[tokio::test]
async fn test_register_rejects_invalid_characters() {
    let app = TestApp::spawn_without_db().await;

    let response = app
        .post("/register")
        .json(&json!({
            "username": "nic ola!",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("invalid characters"));
}

#[tokio::test]
async fn test_create_tweet_rejects_empty_content() {
    let app = TestApp::spawn_without_db().await;

    let token = issue_token(15);

    let response = app
        .post_authenticated("/tweets", &token)
        .json(&json!({ "content": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("must not be empty"));
}

#[tokio::test]
async fn test_create_tweet_rejects_oversized_content() {
    let app = TestApp::spawn_without_db().await;

    let token = issue_token(15);

    let response = app
        .post_authenticated("/tweets", &token)
        .json(&json!({ "content": "x".repeat(281) }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("maximum 280 characters"));
}

#[tokio::test]
async fn test_follow_rejects_malformed_user_id() {
    let app = TestApp::spawn_without_db().await;

    let token = issue_token(15);

    let response = app
        .post_authenticated("/follow", &token)
        .json(&json!({ "followed_user_id": "not-a-uuid" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_follow_rejects_self_follow() {
    let app = TestApp::spawn_without_db().await;

    // The self-follow check compares the token subject against the target id,
    // so it trips before the repository is ever consulted
    let user_id = uuid::Uuid::new_v4().to_string();
    let token = TokenService::new(TEST_JWT_SECRET, Duration::minutes(15))
        .issue(&user_id)
        .expect("Failed to issue token");

    let response = app
        .post_authenticated("/follow", &token)
        .json(&json!({ "followed_user_id": user_id }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("cannot follow themselves"));
}
