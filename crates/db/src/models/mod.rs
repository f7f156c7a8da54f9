//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! DTOs expose `validated()`, which applies the field rules from
//! `taskhub_core::validation` and returns the normalized payload. The
//! repositories assume their inputs have already passed through it.

pub mod project;
pub mod task;

use serde::{Deserialize, Deserializer};

/// Deserialize an update field that distinguishes "absent" from "explicitly
/// null". Combined with `#[serde(default)]`: absent stays `None`, a JSON
/// `null` becomes `Some(None)` (clear the column), and a value becomes
/// `Some(Some(v))`.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
