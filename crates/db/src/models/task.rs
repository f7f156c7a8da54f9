//! Task entity model, status enum, and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskhub_core::error::CoreError;
use taskhub_core::types::{DbId, Timestamp};
use taskhub_core::validation;

use crate::models::project::Project;

/// Lifecycle state of a task, stored as the Postgres enum `task_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: i32,
    pub due_date: Option<NaiveDate>,
    pub project_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A task together with its parent project summary. Every task read and
/// write returns this shape.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithProject {
    #[serde(flatten)]
    pub task: Task,
    pub project: Project,
}

/// Flat row produced by the `tasks JOIN projects` queries.
#[derive(Debug, FromRow)]
pub(crate) struct TaskProjectRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: i32,
    pub due_date: Option<NaiveDate>,
    pub project_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project_name: String,
    pub project_description: Option<String>,
    pub project_created_at: Timestamp,
}

impl From<TaskProjectRow> for TaskWithProject {
    fn from(row: TaskProjectRow) -> Self {
        TaskWithProject {
            task: Task {
                id: row.id,
                title: row.title,
                description: row.description,
                status: row.status,
                priority: row.priority,
                due_date: row.due_date,
                project_id: row.project_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            project: Project {
                id: row.project_id,
                name: row.project_name,
                description: row.project_description,
                created_at: row.project_created_at,
            },
        }
    }
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `TODO` at insert if omitted.
    pub status: Option<TaskStatus>,
    /// Defaults to 3 at insert if omitted.
    pub priority: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub project_id: DbId,
}

impl CreateTask {
    /// Validate field bounds and trim the title.
    ///
    /// The 3-character minimum applies to the title as supplied, before
    /// trimming.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validation::require_length("title", &self.title, 3, 150)?;
        validation::optional_max_length("description", self.description.as_deref(), 1000)?;
        validation::optional_range("priority", self.priority, 1, 5)?;
        self.title = self.title.trim().to_string();
        Ok(self)
    }
}

/// DTO for updating an existing task. All fields are optional; for the
/// nullable columns (`description`, `due_date`) an explicit JSON `null`
/// clears the stored value, while an absent field retains it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<i32>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    pub project_id: Option<DbId>,
}

impl UpdateTask {
    /// Validate whichever fields are supplied; the title is trimmed only
    /// when present, with the minimum checked on the pre-trim value.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        validation::optional_length("title", self.title.as_deref(), 3, 150)?;
        validation::optional_max_length(
            "description",
            self.description.as_ref().and_then(|d| d.as_deref()),
            1000,
        )?;
        validation::optional_range("priority", self.priority, 1, 5)?;
        if let Some(title) = self.title {
            self.title = Some(title.trim().to_string());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(title: &str) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            description: None,
            status: None,
            priority: None,
            due_date: None,
            project_id: 1,
        }
    }

    #[test]
    fn create_trims_title() {
        let task = new_task("  Build UI  ").validated().unwrap();
        assert_eq!(task.title, "Build UI");
    }

    #[test]
    fn create_minimum_applies_before_trimming() {
        // 4 characters raw, 1 after trim: passes and stores the trimmed form.
        let task = new_task("  a ").validated().unwrap();
        assert_eq!(task.title, "a");
    }

    #[test]
    fn create_rejects_short_title() {
        assert!(new_task("ab").validated().is_err());
    }

    #[test]
    fn create_rejects_priority_out_of_range() {
        for bad in [0, 6] {
            let mut task = new_task("Build UI");
            task.priority = Some(bad);
            assert!(task.validated().is_err());
        }
    }

    #[test]
    fn create_keeps_valid_priority_and_status() {
        let mut task = new_task("Build UI");
        task.priority = Some(2);
        task.status = Some(TaskStatus::InProgress);
        let task = task.validated().unwrap();
        assert_eq!(task.priority, Some(2));
        assert_eq!(task.status, Some(TaskStatus::InProgress));
    }

    #[test]
    fn update_trims_title_only_when_supplied() {
        let input = UpdateTask {
            title: Some("  Retitled  ".to_string()),
            description: None,
            status: None,
            priority: None,
            due_date: None,
            project_id: None,
        };
        let input = input.validated().unwrap();
        assert_eq!(input.title.as_deref(), Some("Retitled"));

        let empty = UpdateTask {
            title: None,
            description: None,
            status: None,
            priority: None,
            due_date: None,
            project_id: None,
        };
        assert!(empty.validated().unwrap().title.is_none());
    }

    #[test]
    fn update_rejects_long_description() {
        let input = UpdateTask {
            title: None,
            description: Some(Some("x".repeat(1001))),
            status: None,
            priority: None,
            due_date: None,
            project_id: None,
        };
        assert!(input.validated().is_err());
    }

    #[test]
    fn update_distinguishes_null_from_absent() {
        let explicit: UpdateTask =
            serde_json::from_str(r#"{"description": null, "due_date": null}"#).unwrap();
        assert_eq!(explicit.description, Some(None));
        assert_eq!(explicit.due_date, Some(None));

        let absent: UpdateTask = serde_json::from_str("{}").unwrap();
        assert!(absent.description.is_none());
        assert!(absent.due_date.is_none());

        let valued: UpdateTask = serde_json::from_str(r#"{"due_date": "2026-09-01"}"#).unwrap();
        assert_eq!(
            valued.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1))
        );
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
    }
}
