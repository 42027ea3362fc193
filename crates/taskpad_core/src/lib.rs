//! Core domain logic for taskpad.
//! This crate is the single source of truth for task list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Filter, Task, TaskId, TaskValidationError};
pub use model::theme::Theme;
pub use service::controller::AppController;
pub use service::task_list::TaskList;
pub use store::snapshot::{
    load_tasks, load_theme, save_tasks, save_theme, TaskLoad, TASKS_KEY, THEME_KEY,
};
pub use store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use view::{NoticeKind, View, NOTICE_TTL};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
