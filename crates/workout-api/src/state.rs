//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use workout_auth::{AuthorizationGate, SessionSigner, TokenMinter};
use workout_core::config::AppConfig;
use workout_core::error::AppError;
use workout_core::traits::{Clock, MailSender};
use workout_database::{ExerciseStore, UserStore, WorkoutStore};
use workout_service::{AuthService, AuthSettings, ExerciseService, UserService, WorkoutService};

/// The record stores the services run on.
#[derive(Debug, Clone)]
pub struct Stores {
    /// User identity records.
    pub users: Arc<dyn UserStore>,
    /// Exercise catalog.
    pub exercises: Arc<dyn ExerciseStore>,
    /// Workout plans and schedules.
    pub workouts: Arc<dyn WorkoutStore>,
}

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Registration, verification, login and password flows
    pub auth_service: Arc<AuthService>,
    /// Profile lookups
    pub user_service: Arc<UserService>,
    /// Exercise catalog
    pub exercise_service: Arc<ExerciseService>,
    /// Workout plans and schedules
    pub workout_service: Arc<WorkoutService>,
    /// Session credential check for protected routes
    pub gate: Arc<AuthorizationGate>,
}

impl AppState {
    /// Wires the services on top of the stores, a mail sender and a clock.
    ///
    /// Fails when the signing key or the token lifetime is unusable.
    pub fn build(
        config: AppConfig,
        stores: Stores,
        mailer: Arc<dyn MailSender>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppError> {
        let signer = Arc::new(SessionSigner::from_config(&config.auth, clock.clone())?);
        let minter = Arc::new(TokenMinter::from_config(&config.auth, clock.clone())?);
        let settings = AuthSettings::from_config(&config);

        let auth_service = Arc::new(AuthService::new(
            stores.users.clone(),
            mailer,
            signer.clone(),
            minter,
            clock,
            settings,
        ));
        let user_service = Arc::new(UserService::new(stores.users));
        let exercise_service = Arc::new(ExerciseService::new(stores.exercises.clone()));
        let workout_service = Arc::new(WorkoutService::new(stores.workouts, stores.exercises));
        let gate = Arc::new(AuthorizationGate::new(signer));

        Ok(Self {
            config: Arc::new(config),
            auth_service,
            user_service,
            exercise_service,
            workout_service,
            gate,
        })
    }
}
