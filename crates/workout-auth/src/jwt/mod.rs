//! Stateless session credentials.

pub mod claims;
pub mod signer;

pub use claims::Claims;
pub use signer::SessionSigner;
