//! SQLite-backed key-value substrate.
//!
//! # Responsibility
//! - Implement the `KvStore` capability over the `kv_cells` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Callers must pass a connection bootstrapped by `db::open_db` or
//!   `db::open_db_in_memory`.
//! - One row per key; writes replace the previous value in place.

use crate::store::{KvStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Durable substrate over one SQLite connection.
///
/// Borrows the connection, so several stores (and therefore several cells
/// under distinct keys) can share a single on-device database.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_cells WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_cells (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
