//! In-process key-value store for hosts and tests.
//!
//! # Responsibility
//! - Provide the key-value contract without a database file.
//! - Model storage exhaustion through an optional byte quota.
//!
//! # Invariants
//! - A rejected write leaves the stored entries unchanged.
//! - Quota accounting covers key and value bytes of every entry.

use crate::store::{KeyValueStore, StoreError, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Volatile key-value store with an optional byte quota.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes once total key and value bytes
    /// would exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total bytes currently held across keys and values.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(limit) = self.quota_bytes {
            let replaced = self
                .entries
                .borrow()
                .get(key)
                .map_or(0, |existing| key.len() + existing.len());
            let attempted = self.used_bytes() - replaced + key.len() + value.len();
            if attempted > limit {
                return Err(StoreError::QuotaExceeded {
                    limit_bytes: limit,
                    attempted_bytes: attempted,
                });
            }
        }

        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
