//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Store failures surface as
//! `sqlx::Error`; a missing entity or parent is part of the return type.

pub mod project_repo;
pub mod task_repo;

pub use project_repo::ProjectRepo;
pub use task_repo::{TaskRepo, TaskWrite};
