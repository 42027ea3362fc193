use taskpad_core::{Filter, Task, TaskList, TaskValidationError};

#[test]
fn add_appends_in_order_with_monotonic_ids() {
    let mut list = TaskList::new();

    let first = list.add("Buy milk").unwrap();
    let second = list.add("Walk the dog").unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(list.len(), 2);
    assert_eq!(list.all()[0].text, "Buy milk");
    assert_eq!(list.all()[1].text, "Walk the dog");
    assert!(list.all().iter().all(|task| !task.completed));
}

#[test]
fn add_rejects_blank_text_without_state_change() {
    let mut list = TaskList::new();
    list.add("keep me").unwrap();

    assert_eq!(list.add("").unwrap_err(), TaskValidationError::EmptyText);
    assert_eq!(list.add("   ").unwrap_err(), TaskValidationError::EmptyText);

    assert_eq!(list.len(), 1);
    // A rejected add must not burn an id either.
    assert_eq!(list.add("next").unwrap().id, 2);
}

#[test]
fn remove_returns_task_and_ignores_absent_ids() {
    let mut list = TaskList::new();
    let task = list.add("remove me").unwrap();

    let before: Vec<Task> = list.all().to_vec();
    assert!(list.remove(999).is_none());
    assert_eq!(list.all(), before.as_slice());

    let removed = list.remove(task.id).unwrap();
    assert_eq!(removed.id, task.id);
    assert!(list.is_empty());
    assert!(list.remove(task.id).is_none());
}

#[test]
fn toggle_flips_completion_and_ignores_absent_ids() {
    let mut list = TaskList::new();
    let task = list.add("flip me").unwrap();

    assert!(list.toggle(999).is_none());

    assert_eq!(list.toggle(task.id), Some(true));
    assert_eq!(list.toggle(task.id), Some(false));
    assert!(!list.get(task.id).unwrap().completed);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut list = TaskList::new();
    list.add("a").unwrap();
    let second = list.add("b").unwrap();

    list.remove(second.id).unwrap();
    let third = list.add("c").unwrap();

    assert_eq!(third.id, 3);
}

#[test]
fn from_tasks_resumes_id_counter_above_loaded_maximum() {
    let tasks = vec![
        Task::new(3, "older").unwrap(),
        Task::new(7, "newer").unwrap(),
    ];
    let mut list = TaskList::from_tasks(tasks);

    let added = list.add("fresh").unwrap();
    assert_eq!(added.id, 8);
    assert_eq!(list.len(), 3);
}

#[test]
fn clear_completed_removes_exactly_completed_tasks_in_order() {
    let mut list = TaskList::new();
    let a = list.add("a").unwrap();
    let b = list.add("b").unwrap();
    let c = list.add("c").unwrap();

    list.toggle(a.id).unwrap();
    list.toggle(c.id).unwrap();

    assert_eq!(list.clear_completed(), 2);
    assert_eq!(list.len(), 1);
    assert_eq!(list.all()[0].id, b.id);

    assert_eq!(list.clear_completed(), 0);
    assert_eq!(list.len(), 1);
}

#[test]
fn list_partitions_into_active_and_completed() {
    let mut list = TaskList::new();
    let a = list.add("a").unwrap();
    list.add("b").unwrap();
    let c = list.add("c").unwrap();
    list.toggle(a.id).unwrap();
    list.toggle(c.id).unwrap();

    let all: Vec<i64> = list.list(Filter::All).iter().map(|task| task.id).collect();
    let active: Vec<i64> = list
        .list(Filter::Active)
        .iter()
        .map(|task| task.id)
        .collect();
    let completed: Vec<i64> = list
        .list(Filter::Completed)
        .iter()
        .map(|task| task.id)
        .collect();

    assert_eq!(all.len(), active.len() + completed.len());
    assert!(active.iter().all(|id| !completed.contains(id)));

    let mut merged: Vec<i64> = active.iter().chain(completed.iter()).copied().collect();
    merged.sort_unstable();
    let mut expected = all.clone();
    expected.sort_unstable();
    assert_eq!(merged, expected);
}

#[test]
fn active_count_tracks_pending_tasks() {
    let mut list = TaskList::new();
    assert_eq!(list.active_count(), 0);

    let a = list.add("a").unwrap();
    list.add("b").unwrap();
    assert_eq!(list.active_count(), 2);

    list.toggle(a.id).unwrap();
    assert_eq!(list.active_count(), 1);
}

#[test]
fn lifecycle_scenario_add_toggle_filter_clear() {
    let mut list = TaskList::new();

    let task = list.add("Buy milk").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.all()[0].text, "Buy milk");
    assert!(!list.all()[0].completed);

    list.toggle(task.id).unwrap();
    assert!(list.list(Filter::Active).is_empty());
    assert_eq!(list.list(Filter::Completed).len(), 1);
    assert_eq!(list.list(Filter::Completed)[0].id, task.id);

    assert_eq!(list.clear_completed(), 1);
    assert!(list.is_empty());
}
