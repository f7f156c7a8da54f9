//! Handlers for the `/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskhub_core::error::CoreError;
use taskhub_core::types::DbId;
use taskhub_db::models::task::{CreateTask, TaskWithProject, UpdateTask};
use taskhub_db::repositories::{TaskRepo, TaskWrite};

use crate::error::{AppError, AppResult};
use crate::query::TaskListParams;
use crate::state::AppState;

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<TaskWithProject>)> {
    let input = input.validated()?;
    let task = TaskRepo::create(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }))?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks?project_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<Vec<TaskWithProject>>> {
    let tasks = TaskRepo::list(&state.pool, params.project_id).await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskWithProject>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<TaskWithProject>> {
    let input = input.validated()?;
    match TaskRepo::update(&state.pool, id, &input).await? {
        TaskWrite::Done(task) => Ok(Json(task)),
        TaskWrite::TaskMissing => Err(AppError::Core(CoreError::NotFound { entity: "Task", id })),
        TaskWrite::ProjectMissing(pid) => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: pid,
        })),
    }
}

/// DELETE /tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}
