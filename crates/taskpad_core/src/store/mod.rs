//! Key-value persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the synchronous string-keyed store contract used for snapshots.
//! - Isolate SQLite details from collection/controller orchestration.
//!
//! # Invariants
//! - A failed write leaves the previously stored value intact.
//! - Store implementations never interpret the values they hold.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
pub mod snapshot;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure for key-value reads and writes.
#[derive(Debug)]
pub enum StoreError {
    /// Transport failure in the SQLite backing store.
    Db(DbError),
    /// Connection handed over before migrations ran.
    Uninitialized {
        expected_version: u32,
        actual_version: u32,
    },
    /// Migrated schema is missing a table this store requires.
    MissingTable(&'static str),
    /// Write would exceed the store's byte budget.
    QuotaExceeded {
        limit_bytes: usize,
        attempted_bytes: usize,
    },
    /// Snapshot payload could not be encoded.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Uninitialized {
                expected_version,
                actual_version,
            } => write!(
                f,
                "store connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingTable(table) => write!(f, "store schema is missing table `{table}`"),
            Self::QuotaExceeded {
                limit_bytes,
                attempted_bytes,
            } => write!(
                f,
                "store quota exceeded: write of {attempted_bytes} bytes over {limit_bytes} byte limit"
            ),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Synchronous string-keyed persistent map.
///
/// The application uses exactly two keys (see [`snapshot`]); implementations
/// must treat keys and values as opaque strings.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
