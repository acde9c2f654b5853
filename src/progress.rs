//! Completion percentage calculations at category, task and phase level.
//!
//! All percentage logic lives here so list views, detail views and the TUI
//! gauges agree on rounding and weighting. Every function is pure and total:
//! empty collections yield 0, never a division error.

use std::collections::HashMap;

use crate::fields::Status;
use crate::model::{Category, Phase, Task};

/// Percentage of completed subtasks in a category, rounded. 0 when empty.
pub fn category_completion(category: &Category) -> u32 {
    percentage(
        category.subtasks.iter().filter(|s| s.completed).count() as f64,
        category.subtasks.len() as f64,
    )
}

/// Percentage of completed subtasks across all of a task's categories,
/// rounded. 0 when the task has no subtasks.
pub fn task_completion(task: &Task) -> u32 {
    percentage(task.completed_count() as f64, task.subtask_count() as f64)
}

/// Status contribution of a unit that has no finer-grained breakdown.
pub fn status_weight(status: Status) -> f64 {
    match status {
        Status::Completed => 1.0,
        Status::InProgress => 0.5,
        Status::Pending => 0.0,
    }
}

/// Phase completion over a mixed unit scheme.
///
/// A step with no tasks counts as one unit weighted by its own status. A task
/// with no subtasks counts as one unit weighted by its status. A task with
/// subtasks contributes one unit per subtask. Tasks with a breakdown are
/// therefore measured at subtask granularity while bare steps and bare tasks
/// still move the bar through their status alone.
pub fn phase_completion(phase: &Phase, tasks_by_step: &HashMap<String, Vec<&Task>>) -> u32 {
    let mut done = 0.0;
    let mut total = 0.0;

    for step in &phase.steps {
        let tasks = tasks_by_step.get(&step.id).map(Vec::as_slice).unwrap_or(&[]);
        if tasks.is_empty() {
            total += 1.0;
            done += status_weight(step.status);
            continue;
        }
        for task in tasks {
            if task.subtask_count() == 0 {
                total += 1.0;
                done += status_weight(task.status);
            } else {
                total += task.subtask_count() as f64;
                done += task.completed_count() as f64;
            }
        }
    }

    percentage(done, total)
}

/// Tasks associated with a phase step, in store order.
pub fn tasks_for_step<'a>(tasks: &'a [Task], step_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.step_id.as_deref() == Some(step_id))
        .collect()
}

/// Group all tasks by their step back-reference, for phase-level rollups.
pub fn group_tasks_by_step(tasks: &[Task]) -> HashMap<String, Vec<&Task>> {
    let mut map: HashMap<String, Vec<&Task>> = HashMap::new();
    for t in tasks {
        if let Some(step_id) = &t.step_id {
            map.entry(step_id.clone()).or_default().push(t);
        }
    }
    map
}

fn percentage(done: f64, total: f64) -> u32 {
    if total == 0.0 {
        return 0;
    }
    (done / total * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Step, Subtask};

    fn sub(id: &str, completed: bool) -> Subtask {
        Subtask { id: id.into(), title: id.into(), completed }
    }

    fn cat(id: &str, subtasks: Vec<Subtask>) -> Category {
        Category { id: id.into(), title: id.into(), subtasks, collapsed: false }
    }

    fn task(id: &str, step: &str, status: Status, categories: Vec<Category>) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            status,
            categories,
            resources: vec![],
            deadline: None,
            step_id: Some(step.into()),
        }
    }

    fn step(id: &str, status: Status) -> Step {
        Step {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            status,
            resources: vec![],
        }
    }

    #[test]
    fn empty_collections_yield_zero_not_nan() {
        assert_eq!(category_completion(&cat("c", vec![])), 0);
        assert_eq!(task_completion(&task("t", "s", Status::Pending, vec![])), 0);
        let phase = Phase {
            id: "p".into(),
            title: "p".into(),
            description: String::new(),
            steps: vec![],
        };
        assert_eq!(phase_completion(&phase, &HashMap::new()), 0);
    }

    #[test]
    fn category_rounds_to_nearest() {
        let c = cat("c", vec![sub("a", true), sub("b", false), sub("d", false)]);
        // 1/3 -> 33
        assert_eq!(category_completion(&c), 33);
    }

    #[test]
    fn task_flattens_categories() {
        let t = task(
            "t",
            "s",
            Status::InProgress,
            vec![
                cat("c1", vec![sub("a", true), sub("b", false)]),
                cat("c2", vec![sub("d", true), sub("e", true)]),
            ],
        );
        assert_eq!(task_completion(&t), 75);
    }

    #[test]
    fn half_complete_task_is_fifty() {
        let t = task(
            "t",
            "s",
            Status::InProgress,
            vec![cat("c1", vec![sub("a", true), sub("b", false)])],
        );
        assert_eq!(task_completion(&t), 50);
    }

    #[test]
    fn taskless_in_progress_step_counts_half() {
        let phase = Phase {
            id: "p".into(),
            title: "p".into(),
            description: String::new(),
            steps: vec![step("s1", Status::InProgress)],
        };
        assert_eq!(phase_completion(&phase, &HashMap::new()), 50);
    }

    #[test]
    fn phase_mixes_task_and_subtask_granularity() {
        // s1: one task with 4 subtasks, 2 done -> 2/4 units.
        // s2: one subtask-less completed task -> 1/1 unit.
        // Total 3/5 = 60%.
        let t1 = task(
            "t1",
            "s1",
            Status::InProgress,
            vec![cat("c", vec![sub("a", true), sub("b", true), sub("d", false), sub("e", false)])],
        );
        let t2 = task("t2", "s2", Status::Completed, vec![]);
        let tasks = vec![t1, t2];
        let phase = Phase {
            id: "p".into(),
            title: "p".into(),
            description: String::new(),
            steps: vec![step("s1", Status::Pending), step("s2", Status::Pending)],
        };
        let by_step = group_tasks_by_step(&tasks);
        assert_eq!(phase_completion(&phase, &by_step), 60);
    }

    #[test]
    fn step_status_ignored_once_it_has_tasks() {
        // The step says completed but its task is untouched; tasks win.
        let t = task("t", "s1", Status::Pending, vec![cat("c", vec![sub("a", false)])]);
        let tasks = vec![t];
        let phase = Phase {
            id: "p".into(),
            title: "p".into(),
            description: String::new(),
            steps: vec![step("s1", Status::Completed)],
        };
        let by_step = group_tasks_by_step(&tasks);
        assert_eq!(phase_completion(&phase, &by_step), 0);
    }

    #[test]
    fn tasks_for_step_filters_on_back_reference() {
        let mut t1 = task("t1", "s1", Status::Pending, vec![]);
        let t2 = task("t2", "s2", Status::Pending, vec![]);
        let t3 = task("t3", "s1", Status::Pending, vec![]);
        t1.step_id = Some("s1".into());
        let tasks = vec![t1, t2, t3];
        let hits = tasks_for_step(&tasks, "s1");
        let ids: Vec<_> = hits.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
    }
}
