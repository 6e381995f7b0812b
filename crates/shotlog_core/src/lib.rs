//! Core persistence logic for shotlog.
//!
//! Everything here is local-first: one device, one logical writer, no
//! network. The crate layers a typed persisted cell over an injected
//! key-value substrate and specializes it into the shot journal.

pub mod db;
pub mod journal;
pub mod logging;
pub mod model;
pub mod persist;
pub mod store;

pub use journal::{ShotJournal, SHOTS_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::shot::ShotEntry;
pub use persist::PersistedCell;
pub use store::codec::{Codec, CodecError, CodecResult, JsonCodec};
pub use store::{KvStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
