//! Shot journal: the entry collection over the persisted cell.
//!
//! # Responsibility
//! - Specialize the persisted cell to the fixed shots key and entry vector.
//! - Provide the append / remove-by-id mutation surface for UI callers.
//!
//! # Invariants
//! - Stored order is append order; no operation reorders entries.
//! - Removal is by predicate and drops every entry sharing the id.

mod shot_journal;

pub use shot_journal::{ShotJournal, SHOTS_STORAGE_KEY};
