//! Pure projection of the task collection into display order.
//!
//! # Responsibility
//! - Apply filter criteria as a conjunction of three predicates.
//! - Apply a stable sort over the filtered copy.
//!
//! # Invariants
//! - Inputs are never mutated; a fresh sequence is returned on every call.
//! - Tasks comparing equal keep their relative insertion order in both
//!   sort directions.
//! - Projection has no failure mode; malformed dates fall back to string
//!   comparison.

use std::cmp::Ordering;

use crate::model::criteria::{FilterCriteria, SortCriteria, SortDirection, SortKey, StatusFilter};
use crate::model::task::{Priority, Task};

/// Sorts-last sentinel for tasks without an expiration date.
const MISSING_DATE_SENTINEL: &str = "9999-99-99";

/// Derives the ordered display sequence from raw state plus criteria.
///
/// Called on demand by the presentation layer; results are never cached.
pub fn project(tasks: &[Task], filter: &FilterCriteria, sort: &SortCriteria) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_filter(task, filter))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which keeps equal elements in filtered
    // (= insertion) order even when the comparison is negated for Desc.
    visible.sort_by(|a, b| {
        let ordering = compare(a, b, sort.by);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    visible
}

/// Visibility predicate: all three criteria must hold.
pub fn matches_filter(task: &Task, filter: &FilterCriteria) -> bool {
    let matches_text = task
        .text
        .to_lowercase()
        .contains(&filter.text.to_lowercase());

    let matches_status = match filter.status {
        StatusFilter::All => true,
        StatusFilter::Active => !task.completed,
        StatusFilter::Completed => task.completed,
    };

    let matches_priority = match filter.priority {
        None => true,
        Some(wanted) => task.priority == Some(wanted),
    };

    matches_text && matches_status && matches_priority
}

fn compare(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Priority => priority_rank(a.priority).cmp(&priority_rank(b.priority)),
        SortKey::Date => expiration_key(a).cmp(expiration_key(b)),
    }
}

/// Rank used for priority ordering only.
///
/// A task with no priority ranks as medium here while still never matching
/// a set priority filter. That asymmetry is part of the historical
/// behavior this projector reproduces.
fn priority_rank(priority: Option<Priority>) -> u8 {
    match priority.unwrap_or(Priority::Medium) {
        Priority::High => 3,
        Priority::Medium => 2,
        Priority::Low => 1,
    }
}

fn expiration_key(task: &Task) -> &str {
    task.expiration_date.as_deref().unwrap_or(MISSING_DATE_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::priority_rank;
    use crate::model::task::Priority;

    #[test]
    fn unset_priority_ranks_as_medium() {
        assert_eq!(priority_rank(None), priority_rank(Some(Priority::Medium)));
        assert!(priority_rank(None) > priority_rank(Some(Priority::Low)));
        assert!(priority_rank(None) < priority_rank(Some(Priority::High)));
    }
}
