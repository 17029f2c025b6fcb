//! Verification and reset token minting.

pub mod minter;

pub use minter::TokenMinter;
