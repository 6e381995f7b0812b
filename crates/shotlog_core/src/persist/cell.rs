//! Persisted value cell.
//!
//! # Responsibility
//! - Load one typed value from the substrate at construction.
//! - Write every change back under the same key, synchronously.
//!
//! # Invariants
//! - The default producer is invoked at most once per construction.
//! - A decode failure falls back to the default and emits one diagnostic.
//! - A write failure never reverts or blocks the in-memory update.
//! - Changing the key never triggers a re-read under the new key.

use crate::store::codec::Codec;
use crate::store::KvStore;
use log::warn;

/// A live binding between an in-memory value and one substrate key.
///
/// All operations are synchronous and single-threaded; every mutation is
/// one atomic value-replace-then-write step from the caller's view.
pub struct PersistedCell<T, S: KvStore, C: Codec<T>> {
    key: String,
    value: T,
    store: S,
    codec: C,
    observers: Vec<Box<dyn Fn(&T)>>,
}

impl<T, S: KvStore, C: Codec<T>> PersistedCell<T, S, C> {
    /// Opens a cell with a literal default value.
    ///
    /// See [`PersistedCell::open_with`] for the load semantics.
    pub fn open(store: S, codec: C, key: impl Into<String>, default: T) -> Self {
        Self::open_with(store, codec, key, || default)
    }

    /// Opens a cell, producing the default lazily.
    ///
    /// Load semantics:
    /// - stored value present and decodable: the cell starts from it;
    /// - key absent: the cell starts from the default and writes it through,
    ///   so a later binding at the same key sees the same value;
    /// - stored value unreadable (substrate error or malformed text): the
    ///   cell starts from the default, one warning is emitted, and the
    ///   stored text is left untouched until the next write.
    ///
    /// The producer runs at most once, and not at all when a stored value
    /// decodes successfully.
    pub fn open_with(
        store: S,
        codec: C,
        key: impl Into<String>,
        default: impl FnOnce() -> T,
    ) -> Self {
        let key = key.into();

        let (value, write_through) = match store.get(&key) {
            Ok(Some(raw)) => match codec.decode(&raw) {
                Ok(value) => (value, false),
                Err(err) => {
                    warn!("event=cell_decode module=persist status=error key={key} error={err}");
                    (default(), false)
                }
            },
            Ok(None) => (default(), true),
            Err(err) => {
                warn!("event=cell_read module=persist status=error key={key} error={err}");
                (default(), false)
            }
        };

        let cell = Self {
            key,
            value,
            store,
            codec,
            observers: Vec::new(),
        };
        if write_through {
            cell.persist();
        }
        cell
    }

    /// Returns the current in-memory value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the substrate key the next write will land under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces the value, persists it, then notifies observers.
    ///
    /// Persistence failure is reported on the diagnostic channel only; the
    /// new in-memory value stays authoritative and observers still run.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
        self.notify();
    }

    /// Replaces the value by computing it from the previous one.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Re-targets the cell at a different substrate key.
    ///
    /// Deliberate product contract: the in-memory value is retained and no
    /// read happens under the new key; only the next write lands there.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Registers an observer invoked synchronously after every mutation,
    /// after the write attempt and regardless of its outcome.
    pub fn subscribe(&mut self, observer: impl Fn(&T) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn persist(&self) {
        let raw = match self.codec.encode(&self.value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=cell_encode module=persist status=error key={} error={err}",
                    self.key
                );
                return;
            }
        };

        if let Err(err) = self.store.set(&self.key, &raw) {
            warn!(
                "event=cell_write module=persist status=error key={} error={err}",
                self.key
            );
        }
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.value);
        }
    }
}
