//! Application controller orchestrating collection, store, and view.
//!
//! # Responsibility
//! - Apply host actions to the task collection.
//! - Persist a snapshot after every mutation, then re-render.
//!
//! # Invariants
//! - In-memory state stays authoritative when a snapshot write fails.
//! - Filter changes are never persisted; theme changes always are.
//! - Every entry point runs to completion before the next host event.

use crate::model::task::{Filter, TaskId};
use crate::model::theme::Theme;
use crate::service::task_list::TaskList;
use crate::store::snapshot::{self, TaskLoad};
use crate::store::KeyValueStore;
use crate::view::{NoticeKind, View};
use log::{error, info};

/// Orchestrates the task collection, the key-value store, and the view.
pub struct AppController<K: KeyValueStore, V: View> {
    tasks: TaskList,
    filter: Filter,
    theme: Theme,
    store: K,
    view: V,
}

impl<K: KeyValueStore, V: View> AppController<K, V> {
    /// Loads persisted state, applies the stored theme, and performs the
    /// first full render.
    ///
    /// A corrupt or unreadable task snapshot degrades to an empty collection
    /// and is surfaced through a load-failure notification; it never aborts
    /// startup.
    pub fn bootstrap(store: K, view: V) -> Self {
        let TaskLoad { tasks, recovered } = snapshot::load_tasks(&store);
        let theme = snapshot::load_theme(&store);

        let mut controller = Self {
            tasks: TaskList::from_tasks(tasks),
            filter: Filter::default(),
            theme,
            store,
            view,
        };

        controller.view.highlight_active_theme(controller.theme);
        controller.view.highlight_active_filter(controller.filter);
        controller.render();

        if recovered {
            controller.view.show_notification(
                "stored tasks could not be read; starting with an empty list",
                NoticeKind::Error,
            );
        } else {
            controller
                .view
                .show_notification("task list loaded", NoticeKind::Success);
        }

        info!(
            "event=bootstrap module=controller status=ok tasks={} theme={} recovered={recovered}",
            controller.tasks.len(),
            controller.theme
        );
        controller
    }

    /// Adds a task from raw input text.
    ///
    /// Validation failure keeps the input (and its focus) untouched so the
    /// user can correct it; success clears the input.
    pub fn add_task(&mut self, text: &str) {
        match self.tasks.add(text) {
            Ok(task) => {
                info!(
                    "event=task_add module=controller status=ok id={} chars={}",
                    task.id,
                    task.text.len()
                );
                self.persist();
                self.render();
                self.view.clear_input();
                self.view.show_notification(
                    &format!("task \"{}\" added", task.text),
                    NoticeKind::Success,
                );
            }
            Err(err) => {
                info!("event=task_add module=controller status=rejected error={err}");
                self.view.show_notification(&err.to_string(), NoticeKind::Error);
            }
        }
    }

    /// Deletes the task with `id`; absent ids are a silent no-op.
    pub fn delete_task(&mut self, id: TaskId) {
        let removed = match self.tasks.remove(id) {
            Some(task) => task,
            None => return,
        };
        info!("event=task_delete module=controller status=ok id={}", removed.id);
        self.persist();
        self.render();
        self.view.show_notification("task deleted", NoticeKind::Info);
    }

    /// Toggles completion of the task with `id`; absent ids are a silent
    /// no-op.
    pub fn toggle_task(&mut self, id: TaskId) {
        let completed = match self.tasks.toggle(id) {
            Some(completed) => completed,
            None => return,
        };
        info!("event=task_toggle module=controller status=ok id={id} completed={completed}");
        self.persist();
        self.render();
    }

    /// Removes every completed task and reports the removed count.
    pub fn clear_completed(&mut self) {
        let removed = self.tasks.clear_completed();
        info!("event=task_clear_completed module=controller status=ok removed={removed}");
        self.persist();
        self.render();
        self.view.show_notification(
            &format!("removed {removed} completed task(s)"),
            NoticeKind::Info,
        );
    }

    /// Switches the list filter; re-renders the list only and never persists.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        info!("event=filter_set module=controller status=ok filter={filter}");
        self.view.highlight_active_filter(filter);
        self.view.render_list(self.tasks.all(), filter);
    }

    /// Switches the theme, persisting the choice.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(err) = snapshot::save_theme(&self.store, theme) {
            error!("event=theme_save module=controller status=error theme={theme} error={err}");
            self.view
                .show_notification("failed to save theme choice", NoticeKind::Error);
        } else {
            info!("event=theme_save module=controller status=ok theme={theme}");
        }
        self.view.highlight_active_theme(theme);
        self.view
            .show_notification(&format!("theme \"{theme}\" applied"), NoticeKind::Info);
    }

    /// Host-triggered full re-render of list and counter.
    pub fn refresh(&mut self) {
        self.render();
    }

    /// The in-memory collection, authoritative for this session.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The view, mainly useful for hosts and test doubles.
    pub fn view(&self) -> &V {
        &self.view
    }

    fn persist(&mut self) {
        if let Err(err) = snapshot::save_tasks(&self.store, self.tasks.all()) {
            error!("event=snapshot_save module=controller status=error error={err}");
            self.view.show_notification(
                "failed to save tasks; changes are kept for this session",
                NoticeKind::Error,
            );
        }
    }

    fn render(&mut self) {
        self.view.render_list(self.tasks.all(), self.filter);
        self.view.render_counter(self.tasks.active_count());
    }
}
