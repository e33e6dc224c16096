//! Transient view criteria.
//!
//! # Responsibility
//! - Define the filter and sort parameters the projector consumes.
//! - Pin the fixed defaults every fresh session starts from.
//!
//! # Invariants
//! - Criteria are never persisted; defaults apply on every store open.
//! - `SortCriteria` is replaced wholesale, keeping `by` and `direction`
//!   consistent as a pair.

use crate::model::task::Priority;

/// Completion-state filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// Which task field the projector orders by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Priority,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Desc
    }
}

/// Visibility predicate parameters; all three must hold for a task to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against task text. Empty matches
    /// everything.
    pub text: String,
    pub status: StatusFilter,
    /// When set, only tasks carrying exactly this priority match. A task
    /// with no priority never matches a set filter.
    pub priority: Option<Priority>,
}

/// Ordering parameters applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortCriteria {
    pub by: SortKey,
    pub direction: SortDirection,
}

impl SortCriteria {
    pub fn new(by: SortKey, direction: SortDirection) -> Self {
        Self { by, direction }
    }
}
