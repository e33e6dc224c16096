//! Task store: canonical collection, criteria, and persistence wiring.
//!
//! # Responsibility
//! - Own the live task collection and current filter/sort criteria.
//! - Persist the full collection through the injected storage capability
//!   after every collection mutation.
//!
//! # Invariants
//! - Task ids stay unique across the live collection.
//! - A persist failure never rolls back the in-memory mutation that
//!   already succeeded.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::storage::StorageError;

pub mod task_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while writing the collection to the storage capability.
///
/// Both variants leave in-memory state applied; the caller decides whether
/// and how to report the stale persisted copy.
#[derive(Debug)]
pub enum StoreError {
    Persist(StorageError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persist(err) => write!(f, "failed to persist task collection: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Persist(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
