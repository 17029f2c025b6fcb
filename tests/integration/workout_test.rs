//! Integration tests for the exercise catalog and workout routes.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn leg_day() -> serde_json::Value {
    json!({
        "exercise_id": 2,
        "name": "Leg day",
        "description": "Heavy squats",
        "sets": 5,
        "repetitions": 5,
        "weight": 100.0,
        "order": 1,
    })
}

#[tokio::test]
async fn test_catalog_without_session() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/exercises", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "All exercises retrieved successfully");
    assert_eq!(response.body["data"][0]["name"], "Push-up");

    let response = app
        .request("GET", "/api/v1/exercise-categories", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.message(),
        "All exercise categories retrieved successfully"
    );
}

#[tokio::test]
async fn test_workout_plan_crud() {
    let app = TestApp::new();
    let session = app.signed_in("lifter@example.com").await;

    let response = app.request("GET", "/api/v1/workouts", None, Some(&session)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "No workouts found");

    let response = app
        .request("POST", "/api/v1/workouts", Some(leg_day()), Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.message(), "Workout created successfully");
    let id = response.body["data"]["id"].as_i64().unwrap();

    let path = format!("/api/v1/workouts/{id}");
    let response = app.request("GET", &path, None, Some(&session)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["exercise"]["name"], "Squat");

    let response = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "weight": 110.0, "user_id": 999 })),
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);
    assert_eq!(response.message(), "Workout plan updated successfully");
    assert_eq!(response.body["data"]["weight"], 110.0);
    assert_ne!(response.body["data"]["user_id"], 999);

    let response = app
        .request("PATCH", &path, Some(json!({ "user_id": 999 })), Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "No valid fields to update");

    let response = app.request("DELETE", &path, None, Some(&session)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", &path, None, Some(&session)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_plans_are_private_to_their_owner() {
    let app = TestApp::new();
    let owner = app.signed_in("owner@example.com").await;
    let other = app.signed_in("other@example.com").await;

    let response = app
        .request("POST", "/api/v1/workouts", Some(leg_day()), Some(&owner))
        .await;
    let id = response.body["data"]["id"].as_i64().unwrap();
    let path = format!("/api/v1/workouts/{id}");

    let response = app.request("GET", &path, None, Some(&other)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("PATCH", &path, Some(json!({ "sets": 1 })), Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Workout plan not found or not authorized");

    let response = app.request("DELETE", &path, None, Some(&other)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", &path, None, Some(&owner)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_workout_validation() {
    let app = TestApp::new();
    let session = app.signed_in("lifter@example.com").await;

    let mut body = leg_day();
    body["sets"] = json!(0);
    let response = app
        .request("POST", "/api/v1/workouts", Some(body), Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let mut body = leg_day();
    body["exercise_id"] = json!(999);
    let response = app
        .request("POST", "/api/v1/workouts", Some(body), Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Exercise not found");

    let response = app
        .request("GET", "/api/v1/workouts/abc", None, Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_schedules() {
    let app = TestApp::new();
    let session = app.signed_in("lifter@example.com").await;

    let response = app
        .request("GET", "/api/v1/workouts/schedules", None, Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "No workout schedules found");

    let response = app
        .request("POST", "/api/v1/workouts", Some(leg_day()), Some(&session))
        .await;
    let plan_id = response.body["data"]["id"].as_i64().unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/workouts/schedules",
            Some(json!({
                "workout_plan_id": plan_id,
                "scheduled_date": "2030-01-15T07:00:00Z",
            })),
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["status"], "scheduled");
    let id = response.body["data"]["id"].as_i64().unwrap();

    let response = app
        .request(
            "GET",
            &format!("/api/v1/workouts/schedules/{id}"),
            None,
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["workout_plan_id"], plan_id);

    let response = app
        .request("GET", "/api/v1/workouts/schedules", None, Some(&session))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));

    let response = app
        .request(
            "GET",
            "/api/v1/workouts/schedules/999",
            None,
            Some(&session),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Workout schedule not found");
}
