//! SQLite migration executor for the kv substrate.
//!
//! # Responsibility
//! - Bring a connection up to the current substrate schema.
//! - Apply pending migration steps atomically.
//!
//! # Invariants
//! - Applied schema version is mirrored to `PRAGMA user_version`.
//! - A database written by a newer binary is rejected, never half-read.

use crate::db::{DbError, DbResult};
use rusqlite::{Connection, Transaction};

const LATEST_SCHEMA_VERSION: u32 = 1;

/// Returns the latest substrate schema version known by this binary.
pub fn latest_version() -> u32 {
    LATEST_SCHEMA_VERSION
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let mut version = current_user_version(conn)?;

    if version > LATEST_SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: version,
            latest_supported: LATEST_SCHEMA_VERSION,
        });
    }

    if version == LATEST_SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    while version < LATEST_SCHEMA_VERSION {
        version += 1;
        apply_step(&tx, version)?;
        tx.execute_batch(&format!("PRAGMA user_version = {version};"))?;
    }
    tx.commit()?;

    Ok(())
}

fn apply_step(tx: &Transaction<'_>, version: u32) -> DbResult<()> {
    let sql = match version {
        1 => include_str!("0001_init.sql"),
        other => {
            return Err(DbError::UnsupportedSchemaVersion {
                db_version: other,
                latest_supported: LATEST_SCHEMA_VERSION,
            });
        }
    };
    tx.execute_batch(sql)?;
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
