//! Shared data model and error types.

pub mod errors;
pub mod types;
