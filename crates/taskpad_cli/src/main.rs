//! Terminal host for the taskpad core.
//!
//! # Responsibility
//! - Supply the view implementation and the event loop the core expects from
//!   its host environment.
//! - Keep all task semantics inside `taskpad_core`.
//!
//! # Invariants
//! - One host action maps to one controller entry point, run to completion
//!   before the next line is read.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use taskpad_core::db::open_db;
use taskpad_core::{
    AppController, Filter, NoticeKind, SqliteKeyValueStore, Task, TaskId, Theme, View,
};

const DATA_DIR_NAME: &str = ".taskpad";
const DB_FILE_NAME: &str = "taskpad.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Stdout rendering of the view contract.
///
/// Notifications are printed inline; the dismissal TTL has no terminal
/// counterpart and is ignored.
struct TermView;

impl View for TermView {
    fn render_list(&mut self, tasks: &[Task], filter: Filter) {
        let visible: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
        if visible.is_empty() {
            println!("  (no tasks to show)");
            return;
        }
        for task in visible {
            let mark = if task.completed { "x" } else { " " };
            println!("  [{mark}] {:>3}  {}", task.id, task.text);
        }
    }

    fn render_counter(&mut self, active: usize) {
        println!("  {active} task(s) left");
    }

    fn show_notification(&mut self, message: &str, kind: NoticeKind) {
        println!("  [{}] {message}", kind.as_str());
    }

    fn clear_input(&mut self) {
        // Line input is consumed by the read loop; nothing to clear.
    }

    fn highlight_active_filter(&mut self, filter: Filter) {
        println!("  filter: {filter}");
    }

    fn highlight_active_theme(&mut self, theme: Theme) {
        println!("  theme: {theme}");
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("taskpad: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = data_dir()?;
    std::fs::create_dir_all(&data_dir)?;

    let log_dir = data_dir.join(LOG_DIR_NAME);
    if let Err(err) =
        taskpad_core::init_logging(taskpad_core::default_log_level(), &log_dir.to_string_lossy())
    {
        eprintln!("taskpad: logging disabled: {err}");
    }

    let conn = open_db(data_dir.join(DB_FILE_NAME))?;
    let store = SqliteKeyValueStore::try_new(&conn)?;

    println!("taskpad {}", taskpad_core::core_version());
    let mut app = AppController::bootstrap(store, TermView);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "add" => app.add_task(rest),
            "done" => match parse_id(rest) {
                Some(id) => app.toggle_task(id),
                None => println!("  usage: done <id>"),
            },
            "rm" => match parse_id(rest) {
                Some(id) => app.delete_task(id),
                None => println!("  usage: rm <id>"),
            },
            "clear" => app.clear_completed(),
            "ls" | "list" => app.refresh(),
            "filter" => match Filter::parse(rest) {
                Some(filter) => app.set_filter(filter),
                None => println!("  usage: filter <all|active|completed>"),
            },
            "theme" => match Theme::parse(rest) {
                Some(theme) => app.set_theme(theme),
                None => println!("  usage: theme <light|dark|blue>"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("  unknown command `{other}`; try `help`"),
        }
    }

    Ok(())
}

fn data_dir() -> io::Result<PathBuf> {
    Ok(std::env::current_dir()?.join(DATA_DIR_NAME))
}

fn parse_id(value: &str) -> Option<TaskId> {
    value.parse().ok()
}

fn print_help() {
    println!("commands:");
    println!("  add <text>                     add a task");
    println!("  done <id>                      toggle a task's completion");
    println!("  rm <id>                        delete a task");
    println!("  clear                          remove all completed tasks");
    println!("  ls                             show the list and counter");
    println!("  filter <all|active|completed>  switch the list filter");
    println!("  theme <light|dark|blue>        switch the theme");
    println!("  quit                           leave");
}
