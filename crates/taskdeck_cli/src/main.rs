//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use taskdeck_core::{MemoryStorage, TaskDraft, TaskStore};

fn main() {
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    let mut store = TaskStore::open(MemoryStorage::new());
    if let Err(err) = store.add(TaskDraft::new("probe task")) {
        eprintln!("add failed: {err}");
        std::process::exit(1);
    }

    for task in store.visible_tasks() {
        println!("task id={} text={}", task.id, task.text);
    }
}
