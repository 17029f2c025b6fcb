use std::sync::Arc;

use chrono::{Duration, Utc};

use workout_core::error::ErrorKind;
use workout_database::{MemoryExerciseStore, MemoryWorkoutStore};
use workout_entity::workout::{ScheduleStatus, WorkoutPlanUpdate};

use super::*;
use crate::context::RequestContext;

const ALICE: RequestContext = RequestContext { user_id: 1 };
const BOB: RequestContext = RequestContext { user_id: 2 };

fn service() -> WorkoutService {
    WorkoutService::new(
        Arc::new(MemoryWorkoutStore::new()),
        Arc::new(MemoryExerciseStore::seeded()),
    )
}

fn squats() -> PlanInput {
    PlanInput {
        exercise_id: 2,
        name: "Leg day".into(),
        description: "Heavy squats".into(),
        sets: 5,
        repetitions: 5,
        weight: 100.0,
        order: 1,
    }
}

fn booking(workout_plan_id: i64) -> ScheduleInput {
    ScheduleInput {
        workout_plan_id,
        scheduled_date: Utc::now() + Duration::days(1),
        status: None,
        completed_date: None,
    }
}

#[tokio::test]
async fn test_empty_plan_list_is_not_found() {
    let err = service().list_plans(&ALICE).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "No workouts found");
}

#[tokio::test]
async fn test_create_and_get_plan_with_exercise() {
    let service = service();
    let plan = service.create_plan(&ALICE, squats()).await.unwrap();
    assert_eq!(plan.user_id, ALICE.user_id);

    let details = service.get_plan(&ALICE, plan.id).await.unwrap();
    assert_eq!(details.exercise.name, "Squat");
    assert_eq!(details.sets, 5);

    assert_eq!(service.list_plans(&ALICE).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_plan_rejects_unknown_exercise_and_blank_name() {
    let service = service();
    let err = service
        .create_plan(&ALICE, PlanInput { exercise_id: 99, ..squats() })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Exercise not found");

    let err = service
        .create_plan(&ALICE, PlanInput { name: "  ".into(), ..squats() })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_other_users_plan_is_invisible() {
    let service = service();
    let plan = service.create_plan(&ALICE, squats()).await.unwrap();

    let err = service.get_plan(&BOB, plan.id).await.unwrap_err();
    assert_eq!(err.message, "Workout plan not found");

    let update = WorkoutPlanUpdate {
        sets: Some(1),
        ..Default::default()
    };
    let err = service.update_plan(&BOB, plan.id, update).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Workout plan not found or not authorized");

    let err = service.delete_plan(&BOB, plan.id).await.unwrap_err();
    assert_eq!(err.message, "Workout plan not found or not authorized");

    let err = service.create_schedule(&BOB, booking(plan.id)).await.unwrap_err();
    assert_eq!(err.message, "Workout plan not found");
}

#[tokio::test]
async fn test_update_plan() {
    let service = service();
    let plan = service.create_plan(&ALICE, squats()).await.unwrap();

    let err = service
        .update_plan(&ALICE, plan.id, WorkoutPlanUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "No valid fields to update");

    let bad_exercise = WorkoutPlanUpdate {
        exercise_id: Some(42),
        ..Default::default()
    };
    let err = service
        .update_plan(&ALICE, plan.id, bad_exercise)
        .await
        .unwrap_err();
    assert_eq!(err.message, "Exercise not found");

    let update = WorkoutPlanUpdate {
        weight: Some(105.0),
        exercise_id: Some(1),
        ..Default::default()
    };
    let updated = service.update_plan(&ALICE, plan.id, update).await.unwrap();
    assert_eq!(updated.weight, 105.0);
    assert_eq!(updated.exercise_id, 1);
    assert_eq!(updated.name, "Leg day");
}

#[tokio::test]
async fn test_delete_plan_drops_its_schedules() {
    let service = service();
    let plan = service.create_plan(&ALICE, squats()).await.unwrap();
    service.create_schedule(&ALICE, booking(plan.id)).await.unwrap();

    service.delete_plan(&ALICE, plan.id).await.unwrap();
    let err = service.list_schedules(&ALICE).await.unwrap_err();
    assert_eq!(err.message, "No workout schedules found");
}

#[tokio::test]
async fn test_schedule_lifecycle() {
    let service = service();
    let plan = service.create_plan(&ALICE, squats()).await.unwrap();

    let schedule = service.create_schedule(&ALICE, booking(plan.id)).await.unwrap();
    assert_eq!(schedule.status, ScheduleStatus::Scheduled);
    assert!(schedule.completed_date.is_none());

    let fetched = service.get_schedule(&ALICE, schedule.id).await.unwrap();
    assert_eq!(fetched, schedule);
    assert_eq!(service.list_schedules(&ALICE).await.unwrap().len(), 1);

    let err = service.get_schedule(&BOB, schedule.id).await.unwrap_err();
    assert_eq!(err.message, "Workout schedule not found");
}

#[tokio::test]
async fn test_schedule_completion_dates() {
    let service = service();
    let plan = service.create_plan(&ALICE, squats()).await.unwrap();

    let missing = ScheduleInput {
        status: Some(ScheduleStatus::Completed),
        ..booking(plan.id)
    };
    let err = service.create_schedule(&ALICE, missing).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let input = booking(plan.id);
    let early = ScheduleInput {
        status: Some(ScheduleStatus::Completed),
        completed_date: Some(input.scheduled_date - Duration::hours(1)),
        ..input.clone()
    };
    let err = service.create_schedule(&ALICE, early).await.unwrap_err();
    assert_eq!(err.message, "Completed date cannot precede scheduled date");

    let done = ScheduleInput {
        status: Some(ScheduleStatus::Completed),
        completed_date: Some(input.scheduled_date + Duration::hours(1)),
        ..input
    };
    let schedule = service.create_schedule(&ALICE, done).await.unwrap();
    assert_eq!(schedule.status, ScheduleStatus::Completed);
}
