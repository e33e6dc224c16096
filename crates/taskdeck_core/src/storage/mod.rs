//! Storage capability abstraction and backends.
//!
//! # Responsibility
//! - Define the injected synchronous key-value contract the store persists
//!   through.
//! - Provide in-memory and file-backed implementations.
//!
//! # Invariants
//! - `write` replaces the full value under a key; there are no partial or
//!   appended writes.
//! - A failed `write` must leave the previously stored value either intact
//!   or fully replaced, never truncated garbage the backend reports as ok.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport error raised by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Synchronous key-value capability injected into the task store.
///
/// Modeled on a browser-local storage slot: string keys, string values,
/// whole-value overwrite semantics.
pub trait StorageBackend {
    /// Reads the value stored under `key`, `None` when the slot is empty.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
