//! Derived-view layer.
//!
//! # Responsibility
//! - Turn raw store state plus criteria into the display sequence.
//!
//! # Invariants
//! - Projection is pure and deterministic; it never mutates its inputs and
//!   keeps no state between calls.

pub mod projector;
