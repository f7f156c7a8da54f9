//! Shared query parameter types for API handlers.

use serde::Deserialize;
use taskhub_core::types::DbId;

/// Query parameters for `GET /tasks`.
#[derive(Debug, Deserialize)]
pub struct TaskListParams {
    /// Restrict results to one project. A value of zero behaves the same
    /// as leaving the parameter out.
    pub project_id: Option<DbId>,
}
