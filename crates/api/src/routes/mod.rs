pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET    /projects          -> list
/// POST   /projects          -> create
/// GET    /projects/{id}     -> get_by_id
/// PUT    /projects/{id}     -> update
/// DELETE /projects/{id}     -> delete (cascades to tasks)
///
/// GET    /tasks             -> list (optional ?project_id= filter)
/// POST   /tasks             -> create
/// GET    /tasks/{id}        -> get_by_id
/// PUT    /tasks/{id}        -> update
/// DELETE /tasks/{id}        -> delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
