//! User identity entities.

pub mod model;
pub mod token;

pub use model::{NewUser, User, UserProfile};
pub use token::IssuedToken;
