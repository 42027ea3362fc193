//! Task domain model and list filtering.
//!
//! # Responsibility
//! - Define the canonical task record persisted in snapshots.
//! - Enforce creation-time text validation.
//! - Define the filter modes a view can apply to the collection.
//!
//! # Invariants
//! - `id` is stable and never reused for another task in the same collection.
//! - `text` is stored trimmed and is never empty.
//! - `created_at` is set once at creation and never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task within one collection.
///
/// Ids are assigned by the owning collection from a monotonic counter, so two
/// tasks created back-to-back can never collide.
pub type TaskId = i64;

/// Validation failure raised when constructing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text was empty or whitespace-only.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do item.
///
/// Wire names use camelCase (`createdAt`) to match the persisted snapshot
/// format; timestamps serialize as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Collection-assigned stable id.
    pub id: TaskId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// Completion flag, the only mutable field.
    pub completed: bool,
    /// Creation instant, immutable after construction.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task with the given id and trimmed text.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` trims to nothing.
    pub fn new(id: TaskId, text: impl Into<String>) -> Result<Self, TaskValidationError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            id,
            text: trimmed.to_string(),
            completed: false,
            created_at: Utc::now(),
        })
    }

    /// Re-checks the text invariant, used on records read back from storage.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }
}

/// View mode selecting which tasks are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every task, regardless of completion.
    #[default]
    All,
    /// Tasks still to be done.
    Active,
    /// Tasks already completed.
    Completed,
}

impl Filter {
    /// Returns whether `task` passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses a filter name; returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
