//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Implement the key-value contract over the migrated `kv` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Construction rejects connections whose schema is unmigrated or newer
//!   than this binary supports.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::store::{KeyValueStore, StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Durable key-value store over a migrated SQLite connection.
#[derive(Debug)]
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection after verifying the migrated `kv` schema.
    ///
    /// # Errors
    /// - `StoreError::Uninitialized` when migrations have not run.
    /// - `StoreError::Db(UnsupportedSchemaVersion)` when the schema is newer
    ///   than this binary supports.
    /// - `StoreError::MissingTable` when the `kv` table is absent despite the
    ///   version marker.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected = latest_version();
        let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual < expected {
            return Err(StoreError::Uninitialized {
                expected_version: expected,
                actual_version: actual,
            });
        }
        if actual > expected {
            return Err(StoreError::Db(DbError::UnsupportedSchemaVersion {
                db_version: actual,
                latest_supported: expected,
            }));
        }

        let kv_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv'
            );",
            [],
            |row| row.get(0),
        )?;
        if kv_exists == 0 {
            return Err(StoreError::MissingTable("kv"));
        }

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
