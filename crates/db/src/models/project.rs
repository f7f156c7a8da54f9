//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskhub_core::error::CoreError;
use taskhub_core::types::{DbId, Timestamp};
use taskhub_core::validation;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
}

impl CreateProject {
    /// Validate field bounds, returning the payload ready for insert.
    pub fn validated(self) -> Result<Self, CoreError> {
        validation::require_length("name", &self.name, 3, 100)?;
        validation::optional_max_length("description", self.description.as_deref(), 500)?;
        Ok(self)
    }
}

/// DTO for updating an existing project. All fields are optional; for
/// `description` an explicit JSON `null` clears the stored value, while an
/// absent field retains it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub description: Option<Option<String>>,
}

impl UpdateProject {
    /// Validate whichever fields are supplied; absent fields pass untouched.
    pub fn validated(self) -> Result<Self, CoreError> {
        validation::optional_length("name", self.name.as_deref(), 3, 100)?;
        validation::optional_max_length(
            "description",
            self.description.as_ref().and_then(|d| d.as_deref()),
            500,
        )?;
        Ok(self)
    }
}
