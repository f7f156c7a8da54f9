//! Shared domain types, errors, and validation rules for TaskHub.

pub mod error;
pub mod types;
pub mod validation;
