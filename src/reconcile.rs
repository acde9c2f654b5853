//! Status reconciliation between subtask state and task status.
//!
//! Every mutation of a task flows through this module so the status/subtask
//! consistency rules live in exactly one place. All functions are pure
//! copy-on-write transforms: they take a task by reference and return the
//! updated value. Stale category or subtask ids are tolerated as no-ops
//! because the UI may hold references to rows that were just removed.

use crate::fields::Status;
use crate::model::{Subtask, Task};

/// Set a subtask's completion flag and re-derive the task status.
///
/// After an effective toggle the status is `Completed` when every subtask is
/// done, otherwise `InProgress`. Toggling never takes a task back to
/// `Pending`; only an explicit status change can do that. Unknown ids leave
/// the task untouched.
pub fn toggle_subtask(task: &Task, category_id: &str, subtask_id: &str, completed: bool) -> Task {
    let mut next = task.clone();
    let mut changed = false;
    if let Some(cat) = next.categories.iter_mut().find(|c| c.id == category_id) {
        if let Some(sub) = cat.subtasks.iter_mut().find(|s| s.id == subtask_id) {
            sub.completed = completed;
            changed = true;
        }
    }
    if changed {
        next.status = if next.all_subtasks_completed() {
            Status::Completed
        } else {
            Status::InProgress
        };
    }
    next
}

/// Append a new, incomplete subtask to the named category.
///
/// The caller supplies the id (the store owns id generation). Adding a
/// subtask deliberately does not re-derive the task status; a completed task
/// stays completed until something is toggled. Unknown category ids are
/// no-ops.
pub fn add_subtask(task: &Task, category_id: &str, subtask_id: &str, title: &str) -> Task {
    let mut next = task.clone();
    if let Some(cat) = next.categories.iter_mut().find(|c| c.id == category_id) {
        // Category invariant: no duplicate subtask ids.
        if !cat.subtasks.iter().any(|s| s.id == subtask_id) {
            cat.subtasks.push(Subtask {
                id: subtask_id.to_string(),
                title: title.to_string(),
                completed: false,
            });
        }
    }
    next
}

/// Remove a subtask from the named category. Like `add_subtask`, removal does
/// not re-derive the task status. Unknown ids are no-ops.
pub fn remove_subtask(task: &Task, category_id: &str, subtask_id: &str) -> Task {
    let mut next = task.clone();
    if let Some(cat) = next.categories.iter_mut().find(|c| c.id == category_id) {
        cat.subtasks.retain(|s| s.id != subtask_id);
    }
    next
}

/// Flip a category's collapsed display flag. Pure UI state.
pub fn toggle_category_collapsed(task: &Task, category_id: &str) -> Task {
    let mut next = task.clone();
    if let Some(cat) = next.categories.iter_mut().find(|c| c.id == category_id) {
        cat.collapsed = !cat.collapsed;
    }
    next
}

/// Explicit status transition with the cascade rules.
///
/// - `Completed` forces every subtask in every category to completed, so a
///   100% bar always accompanies a completed badge.
/// - `InProgress` on a fully-completed task un-completes the last subtask of
///   each non-empty category, so the task is visibly not fully done.
/// - `Pending` carries no cascade; subtask state is left untouched. The
///   asymmetry with the other two transitions is intentional, preserved from
///   the observed product behaviour.
///
/// Tasks with no subtasks transition freely in every direction.
pub fn set_status(task: &Task, status: Status) -> Task {
    let mut next = task.clone();
    match status {
        Status::Completed => {
            for cat in next.categories.iter_mut() {
                for sub in cat.subtasks.iter_mut() {
                    sub.completed = true;
                }
            }
        }
        Status::InProgress => {
            if next.all_subtasks_completed() {
                for cat in next.categories.iter_mut() {
                    if let Some(last) = cat.subtasks.last_mut() {
                        last.completed = false;
                    }
                }
            }
        }
        Status::Pending => {}
    }
    next.status = status;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Subtask};
    use crate::progress::task_completion;

    fn sub(id: &str, completed: bool) -> Subtask {
        Subtask { id: id.into(), title: format!("subtask {id}"), completed }
    }

    fn cat(id: &str, subtasks: Vec<Subtask>) -> Category {
        Category { id: id.into(), title: format!("category {id}"), subtasks, collapsed: false }
    }

    fn task_with(status: Status, categories: Vec<Category>) -> Task {
        Task {
            id: "task-1".into(),
            title: "Validate the idea".into(),
            description: String::new(),
            status,
            categories,
            resources: vec![],
            deadline: None,
            step_id: None,
        }
    }

    #[test]
    fn toggling_walks_pending_to_completed() {
        let t = task_with(
            Status::Pending,
            vec![cat("c1", vec![sub("s1", false), sub("s2", false)])],
        );

        let t = toggle_subtask(&t, "c1", "s1", true);
        assert_eq!(t.status, Status::InProgress);
        assert_eq!(task_completion(&t), 50);

        let t = toggle_subtask(&t, "c1", "s2", true);
        assert_eq!(t.status, Status::Completed);
        assert_eq!(task_completion(&t), 100);
    }

    #[test]
    fn toggle_is_idempotent() {
        let t = task_with(
            Status::Pending,
            vec![cat("c1", vec![sub("s1", false), sub("s2", true)])],
        );
        let once = toggle_subtask(&t, "c1", "s1", true);
        let twice = toggle_subtask(&once, "c1", "s1", true);
        assert_eq!(once, twice);
    }

    #[test]
    fn untoggling_everything_stays_in_progress() {
        let t = task_with(Status::InProgress, vec![cat("c1", vec![sub("s1", true)])]);
        let t = toggle_subtask(&t, "c1", "s1", false);
        assert_eq!(t.status, Status::InProgress);
        assert_eq!(task_completion(&t), 0);
    }

    #[test]
    fn completion_and_status_agree_after_toggle() {
        let t = task_with(
            Status::Pending,
            vec![
                cat("c1", vec![sub("s1", false), sub("s2", true)]),
                cat("c2", vec![sub("s3", true)]),
            ],
        );
        let t = toggle_subtask(&t, "c1", "s1", true);
        assert_eq!(task_completion(&t), 100);
        assert_eq!(t.status, Status::Completed);

        let t = toggle_subtask(&t, "c2", "s3", false);
        assert!(task_completion(&t) < 100);
        assert_eq!(t.status, Status::InProgress);
    }

    #[test]
    fn bad_ids_are_noops() {
        let t = task_with(Status::Pending, vec![cat("c1", vec![sub("s1", false)])]);
        assert_eq!(toggle_subtask(&t, "missing-cat", "missing-sub", true), t);
        assert_eq!(toggle_subtask(&t, "c1", "missing-sub", true), t);
        assert_eq!(remove_subtask(&t, "c1", "missing-sub"), t);
        assert_eq!(add_subtask(&t, "missing-cat", "sub-9", "orphan"), t);
        assert_eq!(toggle_category_collapsed(&t, "missing-cat"), t);
    }

    #[test]
    fn explicit_complete_cascades_to_all_subtasks() {
        let t = task_with(
            Status::InProgress,
            vec![
                cat("c1", vec![sub("s1", true), sub("s2", false), sub("s3", false)]),
                cat("c2", vec![sub("s4", false), sub("s5", true), sub("s6", false)]),
            ],
        );
        let t = set_status(&t, Status::Completed);
        assert_eq!(t.status, Status::Completed);
        assert_eq!(task_completion(&t), 100);
        assert!(t.all_subtasks().all(|s| s.completed));
    }

    #[test]
    fn demoting_a_completed_task_reopens_last_subtask_per_category() {
        let t = task_with(
            Status::Completed,
            vec![
                cat("c1", vec![sub("s1", true), sub("s2", true)]),
                cat("c2", vec![sub("s3", true)]),
                cat("empty", vec![]),
            ],
        );
        let t = set_status(&t, Status::InProgress);
        assert_eq!(t.status, Status::InProgress);
        let flags: Vec<bool> = t.all_subtasks().map(|s| s.completed).collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn demoting_a_partial_task_leaves_subtasks_alone() {
        let t = task_with(
            Status::Completed,
            vec![cat("c1", vec![sub("s1", true), sub("s2", false)])],
        );
        let t = set_status(&t, Status::InProgress);
        assert_eq!(t.status, Status::InProgress);
        let flags: Vec<bool> = t.all_subtasks().map(|s| s.completed).collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn pending_has_no_cascade() {
        let t = task_with(
            Status::Completed,
            vec![cat("c1", vec![sub("s1", true), sub("s2", true)])],
        );
        let t = set_status(&t, Status::Pending);
        assert_eq!(t.status, Status::Pending);
        assert!(t.all_subtasks().all(|s| s.completed));
    }

    #[test]
    fn zero_subtask_task_completes_and_reverts_manually() {
        let t = task_with(Status::Pending, vec![]);
        let t = set_status(&t, Status::Completed);
        assert_eq!(t.status, Status::Completed);
        let t = set_status(&t, Status::InProgress);
        assert_eq!(t.status, Status::InProgress);
        let t = set_status(&t, Status::Pending);
        assert_eq!(t.status, Status::Pending);
    }

    #[test]
    fn add_and_remove_do_not_rederive_status() {
        let t = task_with(Status::Completed, vec![cat("c1", vec![sub("s1", true)])]);
        let t = add_subtask(&t, "c1", "s2", "late addition");
        // Still completed even though an incomplete subtask now exists.
        assert_eq!(t.status, Status::Completed);
        assert_eq!(t.subtask_count(), 2);

        let t = remove_subtask(&t, "c1", "s1");
        assert_eq!(t.status, Status::Completed);
        assert_eq!(t.subtask_count(), 1);
    }

    #[test]
    fn added_subtask_starts_incomplete() {
        let t = task_with(Status::Pending, vec![cat("c1", vec![])]);
        let t = add_subtask(&t, "c1", "s1", "first");
        let s = t.all_subtasks().next().unwrap();
        assert_eq!(s.id, "s1");
        assert!(!s.completed);
    }

    #[test]
    fn duplicate_subtask_id_is_rejected() {
        let t = task_with(Status::Pending, vec![cat("c1", vec![sub("s1", false)])]);
        let t = add_subtask(&t, "c1", "s1", "duplicate");
        assert_eq!(t.subtask_count(), 1);
    }

    #[test]
    fn collapse_flag_does_not_touch_completion() {
        let t = task_with(Status::InProgress, vec![cat("c1", vec![sub("s1", true)])]);
        let t = toggle_category_collapsed(&t, "c1");
        assert!(t.categories[0].collapsed);
        assert_eq!(t.status, Status::InProgress);
        let t = toggle_category_collapsed(&t, "c1");
        assert!(!t.categories[0].collapsed);
    }
}
