//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod address;
pub mod token;

pub use address::is_ethereum_address;
pub use token::*;
