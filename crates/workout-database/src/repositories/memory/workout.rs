//! In-memory workout plans and schedules.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use workout_core::result::AppResult;
use workout_entity::workout::{
    NewWorkoutPlan, NewWorkoutSchedule, WorkoutPlan, WorkoutPlanUpdate, WorkoutSchedule,
};

use crate::store::WorkoutStore;

#[derive(Debug, Default)]
struct Inner {
    plans: BTreeMap<i64, WorkoutPlan>,
    schedules: BTreeMap<i64, WorkoutSchedule>,
    next_plan_id: i64,
    next_schedule_id: i64,
}

/// A [`WorkoutStore`] held in process memory.
///
/// Does not know the exercise catalog; callers check exercise ids first.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkoutStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryWorkoutStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkoutStore for MemoryWorkoutStore {
    async fn list_plans(&self, user_id: i64) -> AppResult<Vec<WorkoutPlan>> {
        let inner = self.inner.read().await;
        let mut plans: Vec<_> = inner
            .plans
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        plans.sort_by_key(|p| (p.order, p.id));
        Ok(plans)
    }

    async fn find_plan(&self, user_id: i64, id: i64) -> AppResult<Option<WorkoutPlan>> {
        let inner = self.inner.read().await;
        Ok(inner
            .plans
            .get(&id)
            .filter(|p| p.user_id == user_id)
            .cloned())
    }

    async fn create_plan(&self, data: &NewWorkoutPlan) -> AppResult<WorkoutPlan> {
        let mut inner = self.inner.write().await;
        inner.next_plan_id += 1;
        let now = Utc::now();
        let plan = WorkoutPlan {
            id: inner.next_plan_id,
            user_id: data.user_id,
            exercise_id: data.exercise_id,
            name: data.name.clone(),
            description: data.description.clone(),
            sets: data.sets,
            repetitions: data.repetitions,
            weight: data.weight,
            order: data.order,
            created_at: now,
            updated_at: now,
        };
        inner.plans.insert(plan.id, plan.clone());
        Ok(plan)
    }

    async fn update_plan(
        &self,
        user_id: i64,
        id: i64,
        update: &WorkoutPlanUpdate,
    ) -> AppResult<Option<WorkoutPlan>> {
        let mut inner = self.inner.write().await;
        let Some(plan) = inner.plans.get_mut(&id).filter(|p| p.user_id == user_id) else {
            return Ok(None);
        };
        plan.apply(update);
        plan.updated_at = Utc::now();
        Ok(Some(plan.clone()))
    }

    async fn delete_plan(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        if !inner.plans.get(&id).is_some_and(|p| p.user_id == user_id) {
            return Ok(false);
        }
        inner.plans.remove(&id);
        inner.schedules.retain(|_, s| s.workout_plan_id != id);
        Ok(true)
    }

    async fn list_schedules(&self, user_id: i64) -> AppResult<Vec<WorkoutSchedule>> {
        let inner = self.inner.read().await;
        let mut schedules: Vec<_> = inner
            .schedules
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        schedules.sort_by_key(|s| (s.scheduled_date, s.id));
        Ok(schedules)
    }

    async fn find_schedule(&self, user_id: i64, id: i64) -> AppResult<Option<WorkoutSchedule>> {
        let inner = self.inner.read().await;
        Ok(inner
            .schedules
            .get(&id)
            .filter(|s| s.user_id == user_id)
            .cloned())
    }

    async fn create_schedule(&self, data: &NewWorkoutSchedule) -> AppResult<WorkoutSchedule> {
        let mut inner = self.inner.write().await;
        inner.next_schedule_id += 1;
        let now = Utc::now();
        let schedule = WorkoutSchedule {
            id: inner.next_schedule_id,
            user_id: data.user_id,
            workout_plan_id: data.workout_plan_id,
            scheduled_date: data.scheduled_date,
            status: data.status,
            completed_date: data.completed_date,
            created_at: now,
            updated_at: now,
        };
        inner.schedules.insert(schedule.id, schedule.clone());
        Ok(schedule)
    }
}
