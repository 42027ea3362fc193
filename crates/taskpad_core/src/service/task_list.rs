//! In-memory task collection and its mutation operations.
//!
//! # Responsibility
//! - Own the ordered task collection and the id counter.
//! - Provide add/remove/toggle/clear/list/count entry points.
//!
//! # Invariants
//! - Ids come from a monotonic counter and are never reused, including after
//!   removal.
//! - Collection order is insertion order; no operation reorders tasks.
//! - Operations on absent ids are no-ops.

use crate::model::task::{Filter, Task, TaskId, TaskValidationError};

/// The owned, ordered task collection.
#[derive(Debug)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    /// Creates an empty collection with the id counter at its start value.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a collection from persisted tasks, resuming the id counter
    /// above the highest loaded id.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1);
        Self { tasks, next_id }
    }

    /// Appends a pending task built from `text` and returns a copy of it.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyText` when `text` trims to nothing; the
    ///   collection and the id counter are left unchanged.
    pub fn add(&mut self, text: &str) -> Result<Task, TaskValidationError> {
        let task = Task::new(self.next_id, text)?;
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Removes and returns the task with `id`; `None` when absent.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Flips the completion flag of the task with `id`, returning the new
    /// value; `None` when absent.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Removes every completed task and returns how many were removed.
    /// Remaining tasks keep their relative order.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }

    /// Tasks passing `filter`, in insertion order.
    pub fn list(&self, filter: Filter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    /// Number of tasks not yet completed (the counter source).
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// The full collection in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
