//! Core data records for the journey: subtasks, categories, tasks and phases.
//!
//! Tasks own their categories and subtasks by value. Phases do not own tasks;
//! tasks point back at a phase step through `step_id` and are resolved via
//! lookup (see `progress::tasks_for_step`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// Atomic unit of completion inside a task category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Named grouping of subtasks within a task.
///
/// `collapsed` is display state only and never affects completion maths.
/// Subtask ids are unique within a category; the store's id generator
/// maintains that by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub collapsed: bool,
}

/// A unit of work in the journey, with optional deadline and a weak
/// back-reference to the phase step it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub resources: Vec<String>,
    pub deadline: Option<NaiveDate>,
    pub step_id: Option<String>,
}

/// A single step within a phase. Steps with no associated tasks are tracked
/// through their own status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// A stage of the entrepreneurial journey, statically defined per template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub steps: Vec<Step>,
}

impl Task {
    /// Iterate over every subtask across all categories, in display order.
    pub fn all_subtasks(&self) -> impl Iterator<Item = &Subtask> {
        self.categories.iter().flat_map(|c| c.subtasks.iter())
    }

    /// Total number of subtasks across all categories.
    pub fn subtask_count(&self) -> usize {
        self.categories.iter().map(|c| c.subtasks.len()).sum()
    }

    /// Number of completed subtasks across all categories.
    pub fn completed_count(&self) -> usize {
        self.all_subtasks().filter(|s| s.completed).count()
    }

    /// True when the task has at least one subtask and all are completed.
    pub fn all_subtasks_completed(&self) -> bool {
        self.subtask_count() > 0 && self.all_subtasks().all(|s| s.completed)
    }

    /// Find the category containing a given subtask id.
    pub fn category_of_subtask(&self, subtask_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.subtasks.iter().any(|s| s.id == subtask_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: "task-1".into(),
            title: "Research the market".into(),
            description: String::new(),
            status: Status::Pending,
            categories: vec![
                Category {
                    id: "cat-1".into(),
                    title: "Surveys".into(),
                    subtasks: vec![
                        Subtask { id: "sub-1".into(), title: "Draft questions".into(), completed: true },
                        Subtask { id: "sub-2".into(), title: "Send to 20 people".into(), completed: false },
                    ],
                    collapsed: false,
                },
                Category {
                    id: "cat-2".into(),
                    title: "Competitors".into(),
                    subtasks: vec![Subtask {
                        id: "sub-3".into(),
                        title: "List top 5".into(),
                        completed: false,
                    }],
                    collapsed: true,
                },
            ],
            resources: vec![],
            deadline: None,
            step_id: Some("step-1".into()),
        }
    }

    #[test]
    fn counts_flatten_across_categories() {
        let t = sample_task();
        assert_eq!(t.subtask_count(), 3);
        assert_eq!(t.completed_count(), 1);
        assert!(!t.all_subtasks_completed());
    }

    #[test]
    fn category_of_subtask_spans_categories() {
        let t = sample_task();
        assert_eq!(t.category_of_subtask("sub-3").map(|c| c.id.as_str()), Some("cat-2"));
        assert!(t.category_of_subtask("sub-99").is_none());
    }

    #[test]
    fn zero_subtask_task_is_not_all_completed() {
        let mut t = sample_task();
        t.categories.clear();
        assert!(!t.all_subtasks_completed());
    }

    #[test]
    fn deadline_round_trips_as_iso_date() {
        let mut t = sample_task();
        t.deadline = NaiveDate::from_ymd_opt(2026, 3, 14);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"2026-03-14\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.deadline, t.deadline);
        // Idempotent: serialising the parsed value yields the same string.
        assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }
}
