//! Domain model for the task collection and its view criteria.
//!
//! # Responsibility
//! - Define the canonical task record and its wire-compatible shape.
//! - Define the transient filter/sort criteria consumed by the projector.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - Criteria are session state only and must never reach persistence.

pub mod criteria;
pub mod task;
