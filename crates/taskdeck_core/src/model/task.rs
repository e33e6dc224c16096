//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted under the `todos` key.
//! - Keep serialization field-compatible with the historical wire layout.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is assigned once at creation and never rewritten.
//! - Optional wire fields (`priority`, `expirationDate`) are omitted when
//!   absent and tolerated when missing on load.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Task urgency level.
///
/// Absence of a priority is a distinct state, represented as
/// `Option<Priority>` on the task rather than a fourth variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Canonical task record.
///
/// Field names follow the persisted JSON layout: `expiration_date` and
/// `created_at` serialize as `expirationDate` / `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID, serialized as its canonical string form.
    pub id: TaskId,
    /// Display label. Non-emptiness is the submitting caller's policy.
    pub text: String,
    pub completed: bool,
    /// Calendar date as a `YYYY-MM-DD` string, no time component. Kept as a
    /// string so malformed values degrade via string comparison.
    #[serde(
        rename = "expirationDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Unix epoch milliseconds. Stable tie-break and default sort key.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Unpersisted task payload supplied by the caller for `add`.
///
/// Identity (`id`, `created_at`) is assigned by the store, never by the
/// draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub completed: bool,
    pub priority: Option<Priority>,
    pub expiration_date: Option<String>,
}

impl TaskDraft {
    /// Creates a draft for an uncompleted task with only a label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Task {
    /// Materializes a draft into a task with caller-provided identity.
    ///
    /// Used by the store's `add` path; tests may call it directly to pin
    /// ids and timestamps.
    pub fn from_draft(id: TaskId, created_at: i64, draft: TaskDraft) -> Self {
        Self {
            id,
            text: draft.text,
            completed: draft.completed,
            expiration_date: draft.expiration_date,
            priority: draft.priority,
            created_at,
        }
    }
}
