//! Integration tests for the bearer-protected user routes.

use axum::http::StatusCode;

use crate::helpers::{PASSWORD, TestApp, test_config};

#[tokio::test]
async fn test_profile_with_session() {
    let app = TestApp::new();
    let session = app.signed_in("me@example.com").await;

    let response = app.request("GET", "/api/v1/users", None, Some(&session)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "User profile retrieved successfully");
    let data = &response.body["data"];
    assert_eq!(data["first_name"], "Ada");
    assert_eq!(data["last_name"], "Lovelace");
    assert_eq!(data["email"], "me@example.com");
    assert_eq!(data["is_verified"], true);
    assert!(data.get("password_hash").is_none());
}

#[tokio::test]
async fn test_profile_rejects_bad_credentials() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Unauthorized");

    for header in ["Bearer ", "Bearer", "bearer abc", "Token abc", "Bearer not.a.jwt"] {
        let response = app
            .request_with_header("GET", "/api/v1/users", header)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header:?}");
        assert_eq!(response.message(), "Unauthorized");
    }
}

#[tokio::test]
async fn test_session_from_other_key_is_rejected() {
    let mut config = test_config();
    config.auth.jwt_secret = "some-other-deployment".to_string();
    let other = TestApp::with_config(config);
    let foreign = other.signed_in("x@example.com").await;

    let app = TestApp::new();
    app.signed_in("x@example.com").await;

    let response = app.request("GET", "/api/v1/users", None, Some(&foreign)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new();
    let session = app.signed_in("change@example.com").await;

    let response = app
        .request(
            "PATCH",
            "/api/v1/users/change-password",
            Some(serde_json::json!({
                "old_password": "wrong",
                "new_password": "next-secret",
                "confirm_password": "next-secret",
            })),
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid old password");

    let response = app
        .request(
            "PATCH",
            "/api/v1/users/change-password",
            Some(serde_json::json!({
                "old_password": PASSWORD,
                "new_password": "next-secret",
                "confirm_password": "mismatch",
            })),
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PATCH",
            "/api/v1/users/change-password",
            Some(serde_json::json!({
                "old_password": PASSWORD,
                "new_password": "next-secret",
                "confirm_password": "next-secret",
            })),
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.message(), "Password updated successfully");

    app.login("change@example.com", "next-secret").await;
}

#[tokio::test]
async fn test_change_password_requires_session() {
    let app = TestApp::new();

    let response = app
        .request(
            "PATCH",
            "/api/v1/users/change-password",
            Some(serde_json::json!({
                "old_password": "a",
                "new_password": "b",
                "confirm_password": "b",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_rate_limit_rejects_burst() {
    let mut config = test_config();
    config.server.rate_limit.enabled = true;
    config.server.rate_limit.burst = 2;
    config.server.rate_limit.refill_per_second = 0.001;
    let app = TestApp::with_config(config);

    for _ in 0..2 {
        let response = app.request("GET", "/api/v1/verify-email", None, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let response = app.request("GET", "/api/v1/verify-email", None, None).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.body["error"], "RATE_LIMITED");

    let response = app.request("GET", "/api/v1/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_keys_on_peer_address() {
    let mut config = test_config();
    config.server.rate_limit.enabled = true;
    config.server.rate_limit.burst = 2;
    config.server.rate_limit.refill_per_second = 0.001;
    let app = TestApp::with_config(config);

    // Rotating the forwarded header does not buy an untrusted peer a new bucket.
    for n in 1..=2 {
        let spoofed = format!("203.0.113.{n}");
        let response = app
            .request_from("/api/v1/verify-email", "198.51.100.4:4000", Some(&spoofed))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
    let response = app
        .request_from("/api/v1/verify-email", "198.51.100.4:4001", Some("203.0.113.9"))
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    // Another client is not starved.
    let response = app
        .request_from("/api/v1/verify-email", "198.51.100.5:4000", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rate_limit_trusts_configured_proxy() {
    let mut config = test_config();
    config.server.rate_limit.enabled = true;
    config.server.rate_limit.burst = 1;
    config.server.rate_limit.refill_per_second = 0.001;
    config.server.rate_limit.trusted_proxies = vec!["10.0.0.1".parse().unwrap()];
    let app = TestApp::with_config(config);

    for client in ["203.0.113.1", "203.0.113.2"] {
        let response = app
            .request_from("/api/v1/verify-email", "10.0.0.1:443", Some(client))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
    let response = app
        .request_from("/api/v1/verify-email", "10.0.0.1:443", Some("203.0.113.1"))
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
}
