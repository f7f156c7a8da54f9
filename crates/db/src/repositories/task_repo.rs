//! Repository for the `tasks` table.
//!
//! Every read and write returns the task joined with its parent project
//! summary. Writes that involve `project_id` verify the parent inside the
//! same transaction as the write, so the parent cannot vanish in between.

use sqlx::{PgPool, Postgres, Transaction};
use taskhub_core::types::DbId;

use crate::models::task::{CreateTask, TaskProjectRow, TaskWithProject, UpdateTask};

/// Joined column list shared by every task read.
const JOINED_COLUMNS: &str = "t.id, t.title, t.description, t.status, t.priority, t.due_date, \
     t.project_id, t.created_at, t.updated_at, \
     p.name AS project_name, p.description AS project_description, \
     p.created_at AS project_created_at";

/// Outcome of a task write that has to verify the parent project.
#[derive(Debug)]
pub enum TaskWrite {
    /// The write succeeded; carries the fresh joined row.
    Done(TaskWithProject),
    /// No task with the given id exists.
    TaskMissing,
    /// The supplied `project_id` does not reference an existing project.
    ProjectMissing(DbId),
}

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row joined with its project.
    ///
    /// Returns `None` if `project_id` does not reference an existing
    /// project. The check runs before the insert, in the same transaction,
    /// so the caller gets a uniform NotFound instead of a foreign-key error.
    ///
    /// `status` defaults to `TODO` and `priority` to 3 when omitted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTask,
    ) -> Result<Option<TaskWithProject>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if !project_exists(&mut tx, input.project_id).await? {
            return Ok(None);
        }
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO tasks (title, description, status, priority, due_date, project_id)
             VALUES ($1, $2, COALESCE($3, 'TODO'), COALESCE($4, 3), $5, $6)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.status)
        .bind(input.priority)
        .bind(input.due_date)
        .bind(input.project_id)
        .fetch_one(&mut *tx)
        .await?;
        let row = fetch_joined(&mut tx, id).await?;
        tx.commit().await?;
        Ok(Some(row.into()))
    }

    /// Find a task by its internal ID, joined with its project.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaskWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM tasks t
             JOIN projects p ON p.id = t.project_id
             WHERE t.id = $1"
        );
        let row = sqlx::query_as::<_, TaskProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// List tasks ordered by most recently created first, optionally
    /// restricted to one project.
    ///
    /// A filter value of zero disables the filter, exactly like passing no
    /// filter at all.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
    ) -> Result<Vec<TaskWithProject>, sqlx::Error> {
        let rows = match project_id {
            Some(pid) if pid != 0 => {
                let query = format!(
                    "SELECT {JOINED_COLUMNS} FROM tasks t
                     JOIN projects p ON p.id = t.project_id
                     WHERE t.project_id = $1
                     ORDER BY t.created_at DESC"
                );
                sqlx::query_as::<_, TaskProjectRow>(&query)
                    .bind(pid)
                    .fetch_all(pool)
                    .await?
            }
            _ => {
                let query = format!(
                    "SELECT {JOINED_COLUMNS} FROM tasks t
                     JOIN projects p ON p.id = t.project_id
                     ORDER BY t.created_at DESC"
                );
                sqlx::query_as::<_, TaskProjectRow>(&query)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update a task. Only fields present in `input` are applied; for the
    /// nullable columns a supplied `null` clears the value, an absent field
    /// keeps it. `updated_at` is refreshed on every successful update.
    ///
    /// When `input.project_id` is supplied, the new parent is verified in
    /// the same transaction and a missing one yields
    /// [`TaskWrite::ProjectMissing`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<TaskWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if let Some(pid) = input.project_id {
            if !project_exists(&mut tx, pid).await? {
                return Ok(TaskWrite::ProjectMissing(pid));
            }
        }
        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                status = COALESCE($5, status),
                priority = COALESCE($6, priority),
                due_date = CASE WHEN $7 THEN $8 ELSE due_date END,
                project_id = COALESCE($9, project_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.description.is_some())
        .bind(input.description.as_ref().and_then(|d| d.as_ref()))
        .bind(input.status)
        .bind(input.priority)
        .bind(input.due_date.is_some())
        .bind(input.due_date.flatten())
        .bind(input.project_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((id,)) = updated else {
            return Ok(TaskWrite::TaskMissing);
        };
        let row = fetch_joined(&mut tx, id).await?;
        tx.commit().await?;
        Ok(TaskWrite::Done(row.into()))
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn project_exists(
    tx: &mut Transaction<'_, Postgres>,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row.is_some())
}

async fn fetch_joined(
    tx: &mut Transaction<'_, Postgres>,
    id: DbId,
) -> Result<TaskProjectRow, sqlx::Error> {
    let query = format!(
        "SELECT {JOINED_COLUMNS} FROM tasks t
         JOIN projects p ON p.id = t.project_id
         WHERE t.id = $1"
    );
    sqlx::query_as::<_, TaskProjectRow>(&query)
        .bind(id)
        .fetch_one(&mut **tx)
        .await
}
