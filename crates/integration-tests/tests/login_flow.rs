//! Integration tests for the login exchange.
//!
//! Covers the typed client scenarios against the seeded directory and the
//! raw wire shapes of the contract (status codes and bodies).

use reqwest::StatusCode;
use serde_json::{Value, json};

use pocket_market_core::UserId;
use pocket_market_demo::controllers::{FormState, LoginFormController};
use pocket_market_demo::services::login::{LoginClient, LoginError};
use pocket_market_integration_tests::TestContext;

// ============================================================================
// Typed Client Scenarios
// ============================================================================

#[tokio::test]
async fn test_login_success_builds_session() {
    let ctx = TestContext::new().await;
    let client = LoginClient::new(ctx.base_url.clone());

    let session = client
        .login("zhangsan@example.com", "123456")
        .await
        .expect("login should succeed");

    assert_eq!(session.user_id, UserId::new(1));
    assert_eq!(session.name, "张三");
    assert_eq!(session.email, "zhangsan@example.com");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let ctx = TestContext::new().await;
    let client = LoginClient::new(ctx.base_url.clone());

    let err = client
        .login("zhangsan@example.com", "wrong")
        .await
        .expect_err("login should fail");

    assert_eq!(err, LoginError::InvalidPassword);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let ctx = TestContext::new().await;
    let client = LoginClient::new(ctx.base_url.clone());

    let err = client
        .login("nobody@x.com", "123456")
        .await
        .expect_err("login should fail");

    assert_eq!(err, LoginError::UserNotFound);
}

#[tokio::test]
async fn test_login_empty_fields() {
    let ctx = TestContext::new().await;
    let client = LoginClient::new(ctx.base_url.clone());

    let err = client.login("", "").await.expect_err("login should fail");

    assert_eq!(err, LoginError::MissingFields);
}

#[tokio::test]
async fn test_second_seeded_account_logs_in() {
    let ctx = TestContext::new().await;
    let client = LoginClient::new(ctx.base_url.clone());

    let session = client
        .login("lisi@example.com", "123456")
        .await
        .expect("login should succeed");

    assert_eq!(session.user_id, UserId::new(2));
    assert_eq!(session.name, "李四");
}

// ============================================================================
// Raw Wire Shapes
// ============================================================================

#[tokio::test]
async fn test_success_body_shape() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/login"))
        .json(&json!({"email": "zhangsan@example.com", "password": "123456"}))
        .send()
        .await
        .expect("request should complete");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("body should be JSON");

    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["name"], "张三");
    assert_eq!(body["user"]["email"], "zhangsan@example.com");
    // The password must never cross the wire
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_missing_fields_is_400_with_message() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/login"))
        .json(&json!({"email": "", "password": ""}))
        .send()
        .await
        .expect("request should complete");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("body should be JSON");
    assert_eq!(body["message"], "email and password are required");
}

#[tokio::test]
async fn test_the_two_401_causes_differ_only_by_message() {
    let ctx = TestContext::new().await;

    let unknown = ctx
        .client
        .post(ctx.url("/api/login"))
        .json(&json!({"email": "nobody@x.com", "password": "123456"}))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown: Value = unknown.json().await.expect("body should be JSON");

    let mismatch = ctx
        .client
        .post(ctx.url("/api/login"))
        .json(&json!({"email": "zhangsan@example.com", "password": "nope"}))
        .send()
        .await
        .expect("request should complete");
    assert_eq!(mismatch.status(), StatusCode::UNAUTHORIZED);
    let mismatch: Value = mismatch.json().await.expect("body should be JSON");

    assert_eq!(unknown["message"], "user not found");
    assert_eq!(mismatch["message"], "invalid password");
    // No machine-readable code distinguishes them
    assert!(unknown.get("code").is_none());
    assert!(mismatch.get("code").is_none());
}

#[tokio::test]
async fn test_directory_listing() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/users"))
        .send()
        .await
        .expect("request should complete");

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Value = resp.json().await.expect("body should be JSON");
    let users = users.as_array().expect("body should be an array");

    assert_eq!(users.len(), 4);
    assert_eq!(users[0]["name"], "张三");
    assert_eq!(users[0]["email"], "zhangsan@example.com");
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/health"))
        .send()
        .await
        .expect("request should complete");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

// ============================================================================
// Form Controller Against the Live Server
// ============================================================================

#[tokio::test]
async fn test_form_submit_end_to_end() {
    let ctx = TestContext::new().await;
    let controller = LoginFormController::new(LoginClient::new(ctx.base_url.clone()));

    let state = FormState::new()
        .with_email("zhangsan@example.com")
        .with_password("123456");
    let (state, session) = controller.submit(state).await;

    let session = session.expect("session should be produced");
    assert_eq!(session.name, "张三");
    assert_eq!(state.success_message.as_deref(), Some("Welcome back, 张三!"));
    assert!(state.email.is_empty());
    assert!(state.password.is_empty());
    assert!(state.errors.is_empty());
}

#[tokio::test]
async fn test_form_submit_surfaces_server_outcome_as_one_message() {
    let ctx = TestContext::new().await;
    let controller = LoginFormController::new(LoginClient::new(ctx.base_url.clone()));

    let state = FormState::new()
        .with_email("zhangsan@example.com")
        .with_password("wrong1");
    let (state, session) = controller.submit(state).await;

    assert!(session.is_none());
    assert_eq!(state.errors, vec!["invalid password".to_string()]);
    assert!(state.success_message.is_none());
}
