//! Snapshot persistence for the task collection and theme choice.
//!
//! # Responsibility
//! - Serialize the full task collection as one JSON payload under a fixed key.
//! - Persist the theme choice as a raw string under a second fixed key.
//! - Recover read-side corruption by substituting safe defaults.
//!
//! # Invariants
//! - Read paths never return an error; corruption is reported via
//!   [`TaskLoad::recovered`] or the theme default.
//! - Write paths return store failures unchanged for the caller to surface.
//! - A snapshot that parses but violates task invariants (blank text,
//!   duplicate ids) is treated as corrupt, not partially loaded.

use crate::model::task::Task;
use crate::model::theme::Theme;
use crate::store::{KeyValueStore, StoreResult};
use log::{error, warn};
use std::collections::HashSet;

/// Key holding the JSON-encoded task collection.
pub const TASKS_KEY: &str = "taskpad.tasks";
/// Key holding the raw theme name.
pub const THEME_KEY: &str = "taskpad.theme";

/// Outcome of reading the persisted task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLoad {
    /// Tasks in their persisted (insertion) order; empty on recovery.
    pub tasks: Vec<Task>,
    /// True when stored data existed but could not be used.
    pub recovered: bool,
}

/// Reads the persisted task collection.
///
/// A missing key yields an empty collection. A store read failure or a
/// corrupt payload is logged and also yields an empty collection, with
/// `recovered` set so the caller can surface the data loss.
pub fn load_tasks<K: KeyValueStore>(store: &K) -> TaskLoad {
    let payload = match store.get(TASKS_KEY) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            return TaskLoad {
                tasks: Vec::new(),
                recovered: false,
            }
        }
        Err(err) => {
            error!("event=snapshot_load module=store status=error error_code=store_read_failed error={err}");
            return TaskLoad {
                tasks: Vec::new(),
                recovered: true,
            };
        }
    };

    match decode_tasks(&payload) {
        Ok(tasks) => TaskLoad {
            tasks,
            recovered: false,
        },
        Err(reason) => {
            error!("event=snapshot_load module=store status=error error_code=snapshot_corrupt reason={reason}");
            TaskLoad {
                tasks: Vec::new(),
                recovered: true,
            }
        }
    }
}

/// Serializes the full task collection under [`TASKS_KEY`].
pub fn save_tasks<K: KeyValueStore>(store: &K, tasks: &[Task]) -> StoreResult<()> {
    let payload = serde_json::to_string(tasks)?;
    store.set(TASKS_KEY, &payload)
}

/// Reads the persisted theme choice, falling back to the default when the
/// key is absent, unreadable, or holds an unrecognized name.
pub fn load_theme<K: KeyValueStore>(store: &K) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => match Theme::parse(&value) {
            Some(theme) => theme,
            None => {
                warn!("event=theme_load module=store status=recovered reason=unrecognized value={value}");
                Theme::default()
            }
        },
        Ok(None) => Theme::default(),
        Err(err) => {
            error!("event=theme_load module=store status=error error_code=store_read_failed error={err}");
            Theme::default()
        }
    }
}

/// Persists the theme choice as a raw string under [`THEME_KEY`].
pub fn save_theme<K: KeyValueStore>(store: &K, theme: Theme) -> StoreResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

fn decode_tasks(payload: &str) -> Result<Vec<Task>, String> {
    let tasks: Vec<Task> =
        serde_json::from_str(payload).map_err(|err| format!("invalid snapshot json: {err}"))?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        task.validate()
            .map_err(|err| format!("invalid task {}: {err}", task.id))?;
        if !seen.insert(task.id) {
            return Err(format!("duplicate task id {}", task.id));
        }
    }

    Ok(tasks)
}
