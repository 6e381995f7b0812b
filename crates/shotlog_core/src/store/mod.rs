//! Key-value storage substrate contracts.
//!
//! # Responsibility
//! - Define the injected storage capability used by persisted cells.
//! - Provide an in-memory substrate for tests and embedders without a
//!   durable backend.
//!
//! # Invariants
//! - The substrate stores text only; typed encoding happens in the codec.
//! - Distinct keys are fully independent and never interact.

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub mod codec;
mod sqlite;

pub use sqlite::SqliteKvStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Substrate-level failure: the backing store rejected a read or write.
///
/// Cell callers never see this type; the persisted cell recovers locally
/// and reports through the diagnostic channel.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// The substrate refused the write, e.g. capacity exhausted.
    Rejected(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Rejected(message) => write!(f, "substrate rejected operation: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Rejected(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Injected storage capability: a synchronous, string-keyed, string-valued
/// store.
///
/// Implementations are single-threaded by contract; there is exactly one
/// logical writer per process and no cross-writer coordination.
pub trait KvStore {
    /// Reads the raw text stored at `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes raw text under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory substrate backed by a shared map.
///
/// Clones share the same underlying map, so two cells built over clones of
/// one `MemoryKvStore` observe each other's writes. This mirrors how a
/// device-local store is shared process-wide by key.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    cells: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.cells.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvStore, MemoryKvStore};

    #[test]
    fn memory_store_round_trips_text() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "hello").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn clones_share_one_map() {
        let store = MemoryKvStore::new();
        let twin = store.clone();

        store.set("shared", "1").unwrap();
        assert_eq!(twin.get("shared").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn distinct_keys_stay_independent() {
        let store = MemoryKvStore::new();
        store.set("a", "left").unwrap();
        store.set("b", "right").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("left"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("right"));
    }
}
