//! Shared types and models for MyFish
//!
//! This crate contains the domain entities persisted by the record store
//! and the validation helpers used when new records are captured.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
