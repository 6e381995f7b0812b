//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `shotlog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use shotlog_core::{MemoryKvStore, ShotEntry, ShotJournal, SHOTS_STORAGE_KEY};

fn main() {
    println!("shotlog_core version={}", shotlog_core::core_version());
    println!("shotlog_core storage_key={SHOTS_STORAGE_KEY}");

    // Exercise the journal end to end against the in-memory substrate.
    let mut journal = ShotJournal::open(MemoryKvStore::new());
    journal.append(ShotEntry::new("smoke-1", "2024-01-01"));
    journal.append(ShotEntry::new("smoke-2", "2024-01-02"));
    journal.remove("smoke-1");
    println!("shotlog_core smoke_entries={}", journal.entries().len());
}
