//! # workout-auth
//!
//! Credential primitives for the workout tracker.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `token`: single-use verification and reset token minting
//! - `jwt`: HS256 session credential issuance and validation
//! - `gate`: bearer header parsing into a caller identity

pub mod gate;
pub mod jwt;
pub mod password;
pub mod token;

pub use gate::{AuthorizationGate, CallerIdentity};
pub use jwt::{Claims, SessionSigner};
pub use password::PasswordHasher;
pub use token::TokenMinter;
