//! # Journey - Entrepreneurial Progress Tracker
//!
//! A command-line companion for working through the stages of starting a
//! business, with an optional terminal user interface (TUI).
//!
//! ## Key Features
//!
//! - **Phased Journey Model**: Discovery → Validation → Launch → Growth, each
//! phase broken into steps with tasks attached
//! - **Subtask Roll-up**: task status is derived from subtask completion, with
//! explicit status changes cascading back down
//! - **Profile-Driven Seeding**: describe your business in a sentence and get
//! a starter set of phases, tasks and checklists
//! - **Multiple Interfaces**: full CLI for scripting + interactive TUI with
//! progress gauges
//! - **Local File Storage**: one JSON file per (user, journey) pair
//!
//! ## Quick Start
//!
//! ```bash
//! # Seed a journey from a business profile
//! journey init "an online store for handmade pottery"
//!
//! # See where you stand
//! journey phases
//! journey tasks --due overdue
//!
//! # Work through a task
//! journey view task-1
//! journey toggle task-1 sub-3
//! journey status task-1 completed
//!
//! # Or do it all visually
//! journey ui
//! ```
//!
//! Data is stored locally in `~/.journey/` with each journey as a separate
//! JSON file named after its user and journey keys.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod fields;
pub mod generate;
pub mod journey;
pub mod model;
pub mod progress;
pub mod reconcile;
pub mod store;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
}

use cli::Cli;
use cmd::*;
use journey::Journey;

fn main() {
    let cli = Cli::parse();

    // Determine the store directory
    let store_dir = cli.store.clone().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".journey")
    });
    if let Err(e) = std::fs::create_dir_all(&store_dir) {
        eprintln!("Failed to create store directory {}: {}", store_dir.display(), e);
        std::process::exit(1);
    }

    // Commands that don't need a loaded journey
    match &cli.command {
        Commands::Journeys => {
            cmd_journeys(&store_dir);
            return;
        }
        Commands::Completions { shell } => {
            cmd_completions(*shell);
            return;
        }
        _ => {}
    }

    let journey = Journey::new(&cli.user, &cli.journey, &store_dir);
    if let Err(e) = journey.create_if_not_exists() {
        eprintln!("Failed to create journey file: {e}");
        std::process::exit(1);
    }
    let store_path = journey.file_path.clone();

    if let Commands::Ui = cli.command {
        cmd_ui(&store_path);
        return;
    }

    let mut store = journey.load_store();

    match cli.command {
        Commands::Ui => unreachable!("UI command handled above"),
        Commands::Journeys => unreachable!("Journeys command handled above"),
        Commands::Completions { .. } => unreachable!("Completions command handled above"),

        Commands::Init { profile, file, force } =>
            cmd_init(&mut store, &store_path, profile, file, force),

        Commands::Phases => cmd_phases(&store),

        Commands::Tasks { step, status, due, sort, limit } =>
            cmd_tasks(&store, step, status, due, sort, limit),

        Commands::View { id } => cmd_view(&store, id),

        Commands::Toggle { task, subtask, undone } =>
            cmd_toggle(&mut store, &store_path, task, subtask, undone),

        Commands::Status { task, status } =>
            cmd_status(&mut store, &store_path, task, status),

        Commands::AddSub { task, category, title } =>
            cmd_add_sub(&mut store, &store_path, task, category, title),

        Commands::RmSub { task, subtask } =>
            cmd_rm_sub(&mut store, &store_path, task, subtask),

        Commands::Collapse { task, category } =>
            cmd_collapse(&mut store, &store_path, task, category),

        Commands::Deadline { task, date, clear } =>
            cmd_deadline(&mut store, &store_path, task, date, clear),
    }
}
