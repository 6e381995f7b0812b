//! Typed single-key persistence over the kv substrate.
//!
//! # Responsibility
//! - Synchronize one in-memory value with one substrate key.
//! - Absorb all storage failures locally; callers never handle them.
//!
//! # Invariants
//! - The in-memory value is authoritative even when persistence fails.
//! - Storage and codec failures surface only on the diagnostic channel.

mod cell;

pub use cell::PersistedCell;
