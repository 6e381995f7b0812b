//! Domain model for shot log records.
//!
//! # Responsibility
//! - Define the canonical entry shape persisted by the journal.
//! - Keep optional per-shot metadata as present-or-absent wholes.
//!
//! # Invariants
//! - `id` and `date` are always present on any accepted entry.
//! - Absent optional fields are omitted from the serialized form.

pub mod shot;
