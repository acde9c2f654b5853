//! Enumerations and field types for journey tracking.
//!
//! This module defines the closed status type shared by tasks and phase steps,
//! plus the value enums used for CLI filtering and sorting.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Completion status for tasks and phase steps.
///
/// Persisted data uses the kebab-case strings `pending`, `in-progress` and
/// `completed`; older exports used capitalised variants, accepted via aliases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "InProgress")]
    InProgress,
    #[serde(alias = "Completed")]
    Completed,
}

/// Due-date buckets for task list filtering and display badges.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DueBucket {
    Overdue,
    DueToday,
    Upcoming,
}

/// Available sorting options for task lists.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Deadline,
    Progress,
    Id,
}
