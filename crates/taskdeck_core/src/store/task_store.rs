//! Command surface over the canonical task collection.
//!
//! # Responsibility
//! - Apply add/update/toggle/delete commands and criteria changes.
//! - Serialize and write the full collection after each collection
//!   mutation; persist nothing for criteria changes.
//!
//! # Invariants
//! - `id` and `created_at` are assigned exactly once, by `add`.
//! - Not-found ids on update/toggle/delete are no-ops and skip the write.
//! - Malformed or unreadable persisted data degrades to an empty
//!   collection at open time; it is never fatal.

use log::{error, info, warn};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::model::criteria::{FilterCriteria, SortCriteria, StatusFilter};
use crate::model::task::{Priority, Task, TaskDraft, TaskId};
use crate::storage::StorageBackend;
use crate::store::StoreResult;
use crate::view::projector::project;

/// Fixed storage slot holding the serialized collection.
pub const STORAGE_KEY: &str = "todos";

/// Canonical task collection plus session criteria, bound to one storage
/// backend.
///
/// Single-threaded by design: every command runs to completion, including
/// its persistence write, before control returns.
pub struct TaskStore<S: StorageBackend> {
    items: Vec<Task>,
    filter: FilterCriteria,
    sort: SortCriteria,
    storage: S,
}

impl<S: StorageBackend> TaskStore<S> {
    /// Opens a store over `storage`, loading any previously persisted
    /// collection.
    ///
    /// Missing, unreadable, or unparsable persisted data yields an empty
    /// collection. Criteria always start at their defaults regardless of
    /// what was persisted.
    pub fn open(storage: S) -> Self {
        let items = match storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(items) => {
                    info!(
                        "event=store_load module=store status=ok count={}",
                        items.len()
                    );
                    items
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=recovered error_code=malformed_data error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("event=store_load module=store status=ok count=0 source=empty_slot");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=recovered error_code=read_failed error={err}"
                );
                Vec::new()
            }
        };

        Self {
            items,
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            storage,
        }
    }

    /// Current collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.items
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> &SortCriteria {
        &self.sort
    }

    /// Display sequence for the current collection and criteria.
    pub fn visible_tasks(&self) -> Vec<Task> {
        project(&self.items, &self.filter, &self.sort)
    }

    /// Appends a new task built from `draft` and persists the collection.
    ///
    /// Assigns a fresh id and `created_at = now`. Duplicate text is
    /// allowed.
    pub fn add(&mut self, draft: TaskDraft) -> StoreResult<TaskId> {
        let task = Task::from_draft(Uuid::new_v4(), now_epoch_ms(), draft);
        let id = task.id;
        self.items.push(task);
        self.persist()?;
        Ok(id)
    }

    /// Replaces the task matching `task.id` in place, preserving its
    /// position.
    ///
    /// Returns `Ok(false)` without persisting when no task matches. The
    /// store does not re-derive `id`/`created_at`; the caller carries them
    /// over from the original.
    pub fn update(&mut self, task: Task) -> StoreResult<bool> {
        match self.items.iter().position(|item| item.id == task.id) {
            Some(index) => {
                self.items[index] = task;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Flips `completed` on the matching task; `Ok(false)` when not found.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<bool> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the matching task; `Ok(false)` when not found.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Replaces the text filter. Criteria changes are never persisted.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter.text = text.into();
    }

    pub fn set_filter_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_filter_priority(&mut self, priority: Option<Priority>) {
        self.filter.priority = priority;
    }

    /// Replaces the sort criteria wholesale, keeping key and direction
    /// consistent as a pair.
    pub fn set_sort(&mut self, sort: SortCriteria) {
        self.sort = sort;
    }

    /// Serializes the full collection and overwrites the storage slot.
    ///
    /// There is no incremental write path: every mutation rewrites
    /// everything, matching the persisted-layout contract.
    fn persist(&mut self) -> StoreResult<()> {
        let serialized = serde_json::to_string(&self.items)?;
        if let Err(err) = self.storage.write(STORAGE_KEY, &serialized) {
            error!(
                "event=store_persist module=store status=error count={} error={err}",
                self.items.len()
            );
            return Err(err.into());
        }
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
