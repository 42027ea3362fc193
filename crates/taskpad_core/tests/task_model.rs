use chrono::{DateTime, Utc};
use taskpad_core::{Filter, Task, TaskValidationError, Theme};

#[test]
fn task_new_trims_text_and_sets_defaults() {
    let task = Task::new(1, "  Buy milk  ").unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.text, "Buy milk");
    assert!(!task.completed);
}

#[test]
fn task_new_rejects_empty_and_whitespace_text() {
    assert_eq!(Task::new(1, "").unwrap_err(), TaskValidationError::EmptyText);
    assert_eq!(
        Task::new(1, "   ").unwrap_err(),
        TaskValidationError::EmptyText
    );
    assert_eq!(
        Task::new(1, "\t\n").unwrap_err(),
        TaskValidationError::EmptyText
    );
}

#[test]
fn validate_rejects_blank_text_on_manually_built_task() {
    let task = Task {
        id: 1,
        text: "   ".to_string(),
        completed: false,
        created_at: Utc::now(),
    };

    assert_eq!(task.validate().unwrap_err(), TaskValidationError::EmptyText);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let created_at: DateTime<Utc> = "2026-01-15T10:00:00Z".parse().unwrap();
    let task = Task {
        id: 7,
        text: "Buy milk".to_string(),
        completed: true,
        created_at,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["completed"], true);
    assert_eq!(json["createdAt"], "2026-01-15T10:00:00Z");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn filter_matches_by_completion() {
    let mut task = Task::new(1, "walk the dog").unwrap();

    assert!(Filter::All.matches(&task));
    assert!(Filter::Active.matches(&task));
    assert!(!Filter::Completed.matches(&task));

    task.completed = true;
    assert!(Filter::All.matches(&task));
    assert!(!Filter::Active.matches(&task));
    assert!(Filter::Completed.matches(&task));
}

#[test]
fn filter_parses_known_names_and_rejects_others() {
    assert_eq!(Filter::parse("all"), Some(Filter::All));
    assert_eq!(Filter::parse("active"), Some(Filter::Active));
    assert_eq!(Filter::parse("completed"), Some(Filter::Completed));
    assert_eq!(Filter::parse("done"), None);
    assert_eq!(Filter::default(), Filter::All);
    assert_eq!(Filter::Active.to_string(), "active");
}

#[test]
fn theme_parses_known_names_and_falls_back_otherwise() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("blue"), Some(Theme::Blue));
    assert_eq!(Theme::parse("neon"), None);

    assert_eq!(Theme::parse_or_default("dark"), Theme::Dark);
    assert_eq!(Theme::parse_or_default("neon"), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(Theme::Blue.to_string(), "blue");
    assert_eq!(Theme::ALL, [Theme::Light, Theme::Dark, Theme::Blue]);
}
