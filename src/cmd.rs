//! Command implementations for the CLI interface.
//!
//! This module contains the handlers for the various subcommands, from
//! seeding a journey out of a business profile to toggling individual
//! subtasks and launching the TUI.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use std::path::Path;

use chrono::Local;

use crate::fields::{DueBucket, SortKey, Status};
use crate::generate::seed_journey;
use crate::journey::discover_journeys;
use crate::model::Task;
use crate::progress::{category_completion, task_completion, tasks_for_step};
use crate::reconcile;
use crate::store::{
    due_bucket, format_deadline_relative, format_status, parse_deadline_input, print_task_table,
    resolve_task_identifier, truncate, JourneyStore,
};
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive UI interface.
    Ui,

    /// Seed the journey with phases and tasks from a business profile.
    Init {
        /// Free-text description of the business idea.
        profile: Vec<String>,
        /// Read the profile from a file instead.
        #[arg(long, conflicts_with = "profile")]
        file: Option<std::path::PathBuf>,
        /// Seed even if the journey already has content.
        #[arg(long)]
        force: bool,
    },

    /// List phases with their steps and completion percentages.
    Phases,

    /// List tasks with optional filters.
    Tasks {
        /// Only tasks attached to this phase step.
        #[arg(long)]
        step: Option<String>,
        /// Filter by status.
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Filter by deadline bucket: overdue | due-today | upcoming.
        #[arg(long, value_enum)]
        due: Option<DueBucket>,
        /// Sort key.
        #[arg(long, value_enum, default_value_t = SortKey::Deadline)]
        sort: SortKey,
        /// Limit number of rows printed.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// View a single task by id or title.
    View {
        /// Task id or title to view.
        id: String,
    },

    /// Toggle a subtask's completion.
    Toggle {
        /// Task id or title.
        task: String,
        /// Subtask id.
        subtask: String,
        /// Mark the subtask incomplete instead of complete.
        #[arg(long)]
        undone: bool,
    },

    /// Explicitly set a task's status.
    Status {
        /// Task id or title.
        task: String,
        /// New status: pending | in-progress | completed.
        #[arg(value_enum)]
        status: Status,
    },

    /// Add a subtask to a task category.
    AddSub {
        /// Task id or title.
        task: String,
        /// Category id.
        category: String,
        /// Subtask title.
        title: String,
    },

    /// Remove a subtask from a task.
    RmSub {
        /// Task id or title.
        task: String,
        /// Subtask id.
        subtask: String,
    },

    /// Collapse or expand a task category in detail views.
    Collapse {
        /// Task id or title.
        task: String,
        /// Category id.
        category: String,
    },

    /// Set or clear a task's deadline.
    Deadline {
        /// Task id or title.
        task: String,
        /// Deadline: YYYY-MM-DD, "today", "tomorrow" or "in Nd".
        date: Option<String>,
        /// Clear the deadline.
        #[arg(long, conflicts_with = "date")]
        clear: bool,
    },

    /// List journeys found in the store directory.
    Journeys,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(store_path: &Path) {
    if let Err(e) = run_tui(store_path) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Seed the journey from a business profile.
pub fn cmd_init(
    store: &mut JourneyStore,
    store_path: &Path,
    profile: Vec<String>,
    file: Option<std::path::PathBuf>,
    force: bool,
) {
    if !store.is_empty() && !force {
        eprintln!("Journey already has content; pass --force to seed anyway.");
        std::process::exit(1);
    }

    let text = match file {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to read profile file {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => profile.join(" "),
    };

    match seed_journey(store, &text) {
        Ok(added) => {
            save_or_exit(store, store_path);
            println!(
                "Seeded {} phases and {} tasks from your profile.",
                store.phases.len(),
                added
            );
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Print phases with their steps and completion percentages.
pub fn cmd_phases(store: &JourneyStore) {
    if store.phases.is_empty() {
        println!("No phases yet. Run `journey init <profile>` first.");
        return;
    }

    println!("Overall progress: {}%", store.overall_progress());
    println!();
    for phase in &store.phases {
        println!("{}  [{}%]  {}", phase.id, store.phase_progress(phase), phase.title);
        for step in &phase.steps {
            let attached = tasks_for_step(&store.tasks, &step.id);
            println!(
                "  {:<16} {:<11} {:>2} task(s)  {}",
                step.id,
                format_status(step.status),
                attached.len(),
                step.title
            );
        }
    }
}

/// List tasks with optional filtering and sorting.
pub fn cmd_tasks(
    store: &JourneyStore,
    step: Option<String>,
    status: Option<Status>,
    due: Option<DueBucket>,
    sort: SortKey,
    limit: Option<usize>,
) {
    let today = Local::now().date_naive();

    let mut filtered: Vec<&Task> = store
        .tasks
        .iter()
        .filter(|t| {
            if let Some(ref s) = step {
                if t.step_id.as_deref() != Some(s.as_str()) {
                    return false;
                }
            }
            if let Some(s) = status {
                if t.status != s {
                    return false;
                }
            }
            if let Some(bucket) = due {
                if due_bucket(t.deadline, today) != Some(bucket) {
                    return false;
                }
            }
            true
        })
        .collect();

    match sort {
        SortKey::Deadline => {
            filtered.sort_by_key(|t| (t.deadline.unwrap_or(chrono::NaiveDate::MAX), t.id.clone()))
        }
        SortKey::Progress => {
            filtered.sort_by_key(|t| (task_completion(t), t.id.clone()));
        }
        SortKey::Id => filtered.sort_by_key(|t| t.id.clone()),
    }

    if let Some(n) = limit {
        filtered.truncate(n);
    }

    print_task_table(&filtered);
}

/// View a single task with categories, subtasks and resources.
pub fn cmd_view(store: &JourneyStore, id: String) {
    let task = resolve_task_or_exit(store, &id);

    let today = Local::now().date_naive();
    println!("{}: {}", task.id, task.title);
    if !task.description.is_empty() {
        println!("  {}", task.description);
    }
    println!(
        "  status: {}   done: {}%   deadline: {}   step: {}",
        format_status(task.status),
        task_completion(&task),
        format_deadline_relative(task.deadline, today),
        task.step_id.as_deref().unwrap_or("-")
    );
    for cat in &task.categories {
        let marker = if cat.collapsed { "+" } else { "-" };
        println!(
            "  [{marker}] {} ({}, {}%)",
            truncate(&cat.title, 40),
            cat.id,
            category_completion(cat)
        );
        if !cat.collapsed {
            for sub in &cat.subtasks {
                let check = if sub.completed { "x" } else { " " };
                println!("      [{check}] {} ({})", sub.title, sub.id);
            }
        }
    }
    if !task.resources.is_empty() {
        println!("  resources:");
        for r in &task.resources {
            println!("    - {r}");
        }
    }
}

/// Toggle a subtask's completion flag.
pub fn cmd_toggle(
    store: &mut JourneyStore,
    store_path: &Path,
    task: String,
    subtask: String,
    undone: bool,
) {
    let task = resolve_task_or_exit(store, &task);
    let Some(cat_id) = task.category_of_subtask(&subtask).map(|c| c.id.clone()) else {
        eprintln!("Subtask '{}' not found on task {}", subtask, task.id);
        std::process::exit(1);
    };

    let updated = reconcile::toggle_subtask(&task, &cat_id, &subtask, !undone);
    let status = updated.status;
    let done = task_completion(&updated);
    store.put_task(updated);
    save_or_exit(store, store_path);
    println!("Task {} is now {} ({}% done)", task.id, format_status(status), done);
}

/// Explicitly set a task's status, applying the cascade rules.
pub fn cmd_status(store: &mut JourneyStore, store_path: &Path, task: String, status: Status) {
    let task = resolve_task_or_exit(store, &task);
    let updated = reconcile::set_status(&task, status);
    let done = task_completion(&updated);
    store.put_task(updated);
    save_or_exit(store, store_path);
    println!("Task {} set to {} ({}% done)", task.id, format_status(status), done);
}

/// Append a subtask to a category.
pub fn cmd_add_sub(
    store: &mut JourneyStore,
    store_path: &Path,
    task: String,
    category: String,
    title: String,
) {
    if title.trim().is_empty() {
        eprintln!("Subtask title must not be empty");
        std::process::exit(1);
    }
    let task = resolve_task_or_exit(store, &task);
    if !task.categories.iter().any(|c| c.id == category) {
        eprintln!("Category '{}' not found on task {}", category, task.id);
        std::process::exit(1);
    }

    let sub_id = store.next_subtask_id();
    let updated = reconcile::add_subtask(&task, &category, &sub_id, title.trim());
    store.put_task(updated);
    save_or_exit(store, store_path);
    println!("Added subtask {sub_id}");
}

/// Remove a subtask from a task.
pub fn cmd_rm_sub(store: &mut JourneyStore, store_path: &Path, task: String, subtask: String) {
    let task = resolve_task_or_exit(store, &task);
    let Some(cat_id) = task.category_of_subtask(&subtask).map(|c| c.id.clone()) else {
        eprintln!("Subtask '{}' not found on task {}", subtask, task.id);
        std::process::exit(1);
    };

    let updated = reconcile::remove_subtask(&task, &cat_id, &subtask);
    store.put_task(updated);
    save_or_exit(store, store_path);
    println!("Removed subtask {subtask}");
}

/// Flip a category's collapsed flag.
pub fn cmd_collapse(store: &mut JourneyStore, store_path: &Path, task: String, category: String) {
    let task = resolve_task_or_exit(store, &task);
    let updated = reconcile::toggle_category_collapsed(&task, &category);
    let collapsed = updated
        .categories
        .iter()
        .find(|c| c.id == category)
        .map(|c| c.collapsed);
    store.put_task(updated);
    save_or_exit(store, store_path);
    match collapsed {
        Some(true) => println!("Collapsed {category}"),
        Some(false) => println!("Expanded {category}"),
        None => println!("Category '{category}' not found; nothing changed"),
    }
}

/// Set or clear a task's deadline.
pub fn cmd_deadline(
    store: &mut JourneyStore,
    store_path: &Path,
    task: String,
    date: Option<String>,
    clear: bool,
) {
    let mut task = resolve_task_or_exit(store, &task);
    if clear {
        task.deadline = None;
    } else {
        let Some(input) = date else {
            eprintln!("Provide a date or pass --clear");
            std::process::exit(1);
        };
        match parse_deadline_input(&input) {
            Some(d) => task.deadline = Some(d),
            None => {
                eprintln!("Could not parse deadline '{input}'");
                std::process::exit(1);
            }
        }
    }
    let id = task.id.clone();
    let deadline = task.deadline;
    store.put_task(task);
    save_or_exit(store, store_path);
    match deadline {
        Some(d) => println!("Task {id} due {d}"),
        None => println!("Cleared deadline on {id}"),
    }
}

/// List journeys found in the store directory.
pub fn cmd_journeys(store_dir: &Path) {
    match discover_journeys(store_dir) {
        Ok(journeys) if journeys.is_empty() => {
            println!("No journeys in {}", store_dir.display());
        }
        Ok(journeys) => {
            println!("{:<16} {:<16} {}", "User", "Journey", "File");
            for j in journeys {
                println!("{:<16} {:<16} {}", j.user, j.name, j.file_path.display());
            }
        }
        Err(e) => {
            eprintln!("Failed to read {}: {e}", store_dir.display());
            std::process::exit(1);
        }
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

fn resolve_task_or_exit(store: &JourneyStore, identifier: &str) -> Task {
    match resolve_task_identifier(identifier, store) {
        Ok(id) => match store.get_task(&id) {
            Some(t) => t.clone(),
            None => {
                eprintln!("Task '{}' not found", identifier);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn save_or_exit(store: &JourneyStore, store_path: &Path) {
    if let Err(e) = store.save(store_path) {
        eprintln!("Failed to save journey: {e}");
        std::process::exit(1);
    }
}
