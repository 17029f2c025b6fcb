//! Shared test helpers for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use workout_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, MailConfig, ServerConfig,
};
use workout_core::traits::{Clock, SystemClock};
use workout_api::Stores;
use workout_database::{MemoryExerciseStore, MemoryUserStore, MemoryWorkoutStore};
use workout_mail::MemoryMailSender;

pub const PASSWORD: &str = "correct horse battery";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Credential store behind the router
    pub store: MemoryUserStore,
    /// Everything the app has mailed
    pub outbox: MemoryMailSender,
}

impl TestApp {
    /// Create a new test application with rate limiting off
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = MemoryUserStore::new();
        let outbox = MemoryMailSender::new();
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let stores = Stores {
            users: Arc::new(store.clone()),
            exercises: Arc::new(MemoryExerciseStore::seeded()),
            workouts: Arc::new(MemoryWorkoutStore::new()),
        };
        let state = workout_api::AppState::build(
            config,
            stores,
            Arc::new(outbox.clone()),
            clock,
        )
        .expect("Failed to build app state");

        Self {
            router: workout_api::build_router(state),
            store,
            outbox,
        }
    }

    /// Register an account and return the token from its verification mail
    pub async fn register(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/register",
                Some(serde_json::json!({
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": email,
                    "password": PASSWORD,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        self.mailed_token(email).await
    }

    /// Register, verify and log in; returns the session token
    pub async fn signed_in(&self, email: &str) -> String {
        let token = self.register(email).await;
        let response = self
            .request("GET", &format!("/api/v1/verify-email?token={token}"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

        self.login(email, PASSWORD).await
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Token embedded in the most recent link mailed to `email`
    pub async fn mailed_token(&self, email: &str) -> String {
        let mail = self
            .outbox
            .last_to(email)
            .await
            .expect("No mail sent to recipient");
        let start = mail.body.find("token=").expect("No link in mail body") + "token=".len();
        mail.body[start..]
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .collect()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        self.send(req, body).await
    }

    /// Make a GET request as if it arrived from `peer` over the socket
    pub async fn request_from(
        &self,
        path: &str,
        peer: &str,
        forwarded_for: Option<&str>,
    ) -> TestResponse {
        let peer: SocketAddr = peer.parse().expect("Invalid peer address");
        let mut req = Request::builder()
            .method("GET")
            .uri(path)
            .extension(ConnectInfo(peer));
        if let Some(forwarded_for) = forwarded_for {
            req = req.header("x-forwarded-for", forwarded_for);
        }
        self.send(req, None).await
    }

    /// Make a request with a raw `Authorization` header value
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        header: &str,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Authorization", header);
        self.send(req, None).await
    }

    async fn send(&self, req: axum::http::request::Builder, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = req
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of the body
    pub fn message(&self) -> &str {
        self.body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}

/// Configuration with a fixed secret, 24 hour tokens and no rate limiting
pub fn test_config() -> AppConfig {
    let mut server = ServerConfig::default();
    server.rate_limit.enabled = false;

    AppConfig {
        server,
        database: DatabaseConfig {
            url: "postgres://unused/workouts".to_string(),
            ..DatabaseConfig::default()
        },
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_ttl_hours: Some(24),
            strict_enumeration_resistance: false,
        },
        mail: MailConfig::default(),
        logging: LoggingConfig::default(),
    }
}
