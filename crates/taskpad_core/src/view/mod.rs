//! View capability contract.
//!
//! # Responsibility
//! - Define the rendering surface the controller drives.
//! - Keep core logic testable without a host environment.
//!
//! # Invariants
//! - Implementations display state; they never mutate it.
//! - Notifications are transient and carry a severity kind.

use crate::model::task::{Filter, Task};
use crate::model::theme::Theme;
use std::time::Duration;

/// Suggested lifetime of a transient notification before the host dismisses
/// it. Hosts without a dismissal surface may ignore it.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Severity tag for transient notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Rendering capability supplied by the host environment.
///
/// `render_list` receives the full collection plus the active filter so the
/// host decides how filtered-out tasks disappear (re-render, animation, ...);
/// [`Filter::matches`] gives the subset to display.
pub trait View {
    /// Replaces the displayed task list with the tasks passing `filter`.
    fn render_list(&mut self, tasks: &[Task], filter: Filter);

    /// Updates the remaining-active-task counter.
    fn render_counter(&mut self, active: usize);

    /// Shows a transient notification (see [`NOTICE_TTL`]).
    fn show_notification(&mut self, message: &str, kind: NoticeKind);

    /// Clears the task input field after a successful add.
    fn clear_input(&mut self);

    /// Marks `filter` as the active list filter control.
    fn highlight_active_filter(&mut self, filter: Filter);

    /// Marks `theme` as the active theme control and applies its style.
    fn highlight_active_theme(&mut self, theme: Theme);
}
