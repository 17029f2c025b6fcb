//! Account registration, verification, login and password flows.

pub mod service;
pub mod types;


pub use service::AuthService;
pub use types::{AuthSettings, ChangePasswordInput, RegisterInput, ResetPasswordInput};
