//! Integration tests for registration, verification, login and reset.

use axum::http::StatusCode;

use crate::helpers::{PASSWORD, TestApp, test_config};

#[tokio::test]
async fn test_register_returns_created_and_mails_link() {
    let app = TestApp::new();
    let token = app.register("ada@example.com").await;

    assert_eq!(token.len(), 32);
    let mail = app.outbox.last_to("ada@example.com").await.unwrap();
    assert_eq!(mail.subject, "Please verify your email");
    assert!(mail.body.starts_with("Hi Ada,"));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("dup@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/v1/register",
            Some(serde_json::json!({
                "first_name": "Other",
                "last_name": "Person",
                "email": "dup@example.com",
                "password": "whatever",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(response.message(), "Email already exists");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_register_missing_field_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/register",
            Some(serde_json::json!({
                "first_name": "Ada",
                "email": "ada@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "All fields are required");
    assert!(app.outbox.sent().await.is_empty());
}

#[tokio::test]
async fn test_register_malformed_email_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/register",
            Some(serde_json::json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "not-an-email",
                "password": PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_login_before_verification_is_rejected() {
    let app = TestApp::new();
    app.register("early@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({ "email": "early@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Email not verified");
}

#[tokio::test]
async fn test_verify_then_login() {
    let app = TestApp::new();
    let token = app.register("flow@example.com").await;

    let response = app
        .request("GET", &format!("/api/v1/verify-email?token={token}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Email verified successfully");

    // Tokens are single use.
    let response = app
        .request("GET", &format!("/api/v1/verify-email?token={token}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let session = app.login("flow@example.com", PASSWORD).await;
    assert_eq!(session.split('.').count(), 3);
}

#[tokio::test]
async fn test_verify_without_token_is_bad_request() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/verify-email", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Token is required");

    let response = app
        .request("GET", "/api/v1/verify-email?token=", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resend_replaces_verification_token() {
    let app = TestApp::new();
    let first = app.register("resend@example.com").await;

    let response = app
        .request("POST", "/api/v1/send?email=resend@example.com", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let second = app.mailed_token("resend@example.com").await;
    assert_ne!(first, second);

    let response = app
        .request("GET", &format!("/api/v1/verify-email?token={first}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", &format!("/api/v1/verify-email?token={second}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/v1/send?email=resend@example.com", None, None)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_send_for_unknown_email_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/send?email=ghost@example.com", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("POST", "/api/v1/send", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Email is required");
}

#[tokio::test]
async fn test_login_failures() {
    let app = TestApp::new();
    app.signed_in("fail@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({ "email": "fail@example.com", "password": "nope" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid credentials");

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({ "email": "ghost@example.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid credentials");

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({ "email": "fail@example.com" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_strict_mode_hides_unverified_accounts() {
    let mut config = test_config();
    config.auth.strict_enumeration_resistance = true;
    let app = TestApp::with_config(config);
    app.register("quiet@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(serde_json::json!({ "email": "quiet@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid credentials");
}

#[tokio::test]
async fn test_forgot_and_reset_password() {
    let app = TestApp::new();
    app.signed_in("reset@example.com").await;

    let response = app
        .request("POST", "/api/v1/forgot-password?email=reset@example.com", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let mail = app.outbox.last_to("reset@example.com").await.unwrap();
    assert_eq!(mail.subject, "Reset your password");
    let token = app.mailed_token("reset@example.com").await;

    let response = app
        .request(
            "POST",
            &format!("/api/v1/reset-password?token={token}"),
            Some(serde_json::json!({ "password": "new-secret", "confirm_password": "different" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Passwords do not match");

    let response = app
        .request(
            "POST",
            &format!("/api/v1/reset-password?token={token}"),
            Some(serde_json::json!({ "password": "new-secret", "confirm_password": "new-secret" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Password reset successfully");

    // Reset tokens are single use.
    let response = app
        .request(
            "POST",
            &format!("/api/v1/reset-password?token={token}"),
            Some(serde_json::json!({ "password": "again", "confirm_password": "again" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.login("reset@example.com", "new-secret").await;
}

#[tokio::test]
async fn test_forgot_password_requires_verified_account() {
    let app = TestApp::new();
    app.register("pending@example.com").await;

    let response = app
        .request("POST", "/api/v1/forgot-password?email=pending@example.com", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Email not verified");
}

#[tokio::test]
async fn test_mail_failure_is_bad_gateway_and_keeps_account() {
    let app = TestApp::new();
    app.outbox.set_failing(true);

    let response = app
        .request(
            "POST",
            "/api/v1/register",
            Some(serde_json::json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "bounce@example.com",
                "password": PASSWORD,
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(app.store.len().await, 1);

    app.outbox.set_failing(false);
    let response = app
        .request("POST", "/api/v1/send?email=bounce@example.com", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
