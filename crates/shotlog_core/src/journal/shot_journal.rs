//! Append/remove journal for shot entries.
//!
//! # Responsibility
//! - Own the one well-known storage key for the shot collection.
//! - Delegate every mutation to the persisted cell's compute-from-previous
//!   update.
//!
//! # Invariants
//! - `append` never validates entry fields and accepts duplicate ids.
//! - `remove` drops all entries with the given id, not only the first.
//! - Every mutation performs a write cycle, including value no-ops.

use crate::model::shot::ShotEntry;
use crate::persist::PersistedCell;
use crate::store::codec::JsonCodec;
use crate::store::KvStore;

/// Storage key for the shot collection.
///
/// The version segment exists so a future incompatible entry schema can
/// move to a new key without migrating old data in place.
pub const SHOTS_STORAGE_KEY: &str = "shotlog:v1:shots";

/// The user's shot history, persisted under [`SHOTS_STORAGE_KEY`].
///
/// A thin specialization of [`PersistedCell`]: one fixed key, entry-vector
/// value, empty default. Display ordering is a read-time presentation
/// concern and lives with the consuming UI, not here.
pub struct ShotJournal<S: KvStore> {
    cell: PersistedCell<Vec<ShotEntry>, S, JsonCodec>,
}

impl<S: KvStore> ShotJournal<S> {
    /// Opens the journal over the given substrate.
    ///
    /// First use on an empty substrate starts from an empty collection and
    /// persists it; unreadable stored data degrades to empty with a
    /// diagnostic, exactly like any persisted cell.
    pub fn open(store: S) -> Self {
        Self {
            cell: PersistedCell::open_with(store, JsonCodec, SHOTS_STORAGE_KEY, Vec::new),
        }
    }

    /// Current entries in stored (append) order.
    pub fn entries(&self) -> &[ShotEntry] {
        self.cell.get()
    }

    /// Appends one entry at the end of the collection.
    ///
    /// Garbage in, garbage out: no field validation, and a duplicate `id`
    /// is stored as an independent entry.
    pub fn append(&mut self, entry: ShotEntry) {
        self.cell.update(|prev| {
            let mut next = prev.clone();
            next.push(entry);
            next
        });
    }

    /// Removes every entry whose id equals `id`.
    ///
    /// Filter-based removal policy: duplicates under one id all go at once.
    /// An absent id is a value no-op that still runs a write cycle.
    pub fn remove(&mut self, id: &str) {
        self.cell
            .update(|prev| prev.iter().filter(|shot| shot.id != id).cloned().collect());
    }

    /// Registers an observer of the collection, invoked after every
    /// mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&[ShotEntry]) + 'static) {
        self.cell.subscribe(move |entries| observer(entries));
    }
}
