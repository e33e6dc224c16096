//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for task-collection invariants.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging};
pub use model::criteria::{FilterCriteria, SortCriteria, SortDirection, SortKey, StatusFilter};
pub use model::task::{Priority, Task, TaskDraft, TaskId};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError, StorageResult};
pub use store::task_store::{TaskStore, STORAGE_KEY};
pub use store::{StoreError, StoreResult};
pub use view::projector::project;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
