//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    PhaseList,
    TaskList,
    TaskDetail,
    AddSubtask,
    Help,
}

/// A visible row in the task detail view. Category headers and subtasks share
/// one selectable list, with subtasks hidden while their category is
/// collapsed.
#[derive(Clone, PartialEq, Debug)]
pub enum DetailRow {
    Category { category_id: String },
    Subtask { category_id: String, subtask_id: String },
}

impl DetailRow {
    /// The category the row belongs to.
    pub fn category_id(&self) -> &str {
        match self {
            DetailRow::Category { category_id } => category_id,
            DetailRow::Subtask { category_id, .. } => category_id,
        }
    }
}
