//! Persistence and utility functions for journey data.
//!
//! This module provides the `JourneyStore` struct holding the phases and
//! tasks of one journey, along with id generation, identifier resolution,
//! deadline bucketing and display formatting helpers.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::fields::{DueBucket, Status};
use crate::model::{Phase, Task};
use crate::progress::{group_tasks_by_step, phase_completion, task_completion};

/// In-memory store for one journey's phases and tasks.
///
/// `next_id` is a monotonic counter shared by task, category and subtask id
/// generation, so ids are unique across the whole store.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JourneyStore {
    pub phases: Vec<Phase>,
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub next_id: u64,
}

impl JourneyStore {
    /// Load a store from a JSON file, returning an empty store if the file
    /// doesn't exist or can't be parsed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return JourneyStore::default();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Error parsing journey file, starting fresh: {e}");
                    JourneyStore::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading journey file, starting fresh: {e}");
                JourneyStore::default()
            }
        }
    }

    /// Save the store to a JSON file using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// True when the store holds no phases and no tasks.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty() && self.tasks.is_empty()
    }

    fn bump(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Generate a fresh task id.
    pub fn next_task_id(&mut self) -> String {
        format!("task-{}", self.bump())
    }

    /// Generate a fresh category id.
    pub fn next_category_id(&mut self) -> String {
        format!("cat-{}", self.bump())
    }

    /// Generate a fresh subtask id.
    pub fn next_subtask_id(&mut self) -> String {
        format!("sub-{}", self.bump())
    }

    /// Get a task by id.
    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace a task in place, matching on id. Unknown ids are ignored.
    pub fn put_task(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    /// Get a phase by id.
    pub fn get_phase(&self, id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    /// Completion percentage for one phase over the current task collection.
    pub fn phase_progress(&self, phase: &Phase) -> u32 {
        phase_completion(phase, &group_tasks_by_step(&self.tasks))
    }

    /// Overall journey completion, averaged over phase percentages.
    pub fn overall_progress(&self) -> u32 {
        if self.phases.is_empty() {
            return 0;
        }
        let by_step = group_tasks_by_step(&self.tasks);
        let sum: u32 = self
            .phases
            .iter()
            .map(|p| phase_completion(p, &by_step))
            .sum();
        (sum as f64 / self.phases.len() as f64).round() as u32
    }
}

/// Resolve a task identifier (either id or title) to a task id.
/// Returns an error if the title matches multiple tasks.
pub fn resolve_task_identifier(identifier: &str, store: &JourneyStore) -> Result<String, String> {
    if store.get_task(identifier).is_some() {
        return Ok(identifier.to_string());
    }

    let matches: Vec<&Task> = store
        .tasks
        .iter()
        .filter(|t| t.title.to_lowercase() == identifier.to_lowercase())
        .collect();

    match matches.len() {
        0 => Err(format!("No task found with id or title '{}'", identifier)),
        1 => Ok(matches[0].id.clone()),
        _ => {
            let mut msg = format!("Multiple tasks titled '{}':\n", identifier);
            for t in matches {
                msg.push_str(&format!("  {}: {}\n", t.id, t.title));
            }
            msg.push_str("Please use the specific id instead.");
            Err(msg)
        }
    }
}

/// Classify a deadline relative to today. `None` deadlines have no bucket.
pub fn due_bucket(deadline: Option<NaiveDate>, today: NaiveDate) -> Option<DueBucket> {
    let d = deadline?;
    Some(if d < today {
        DueBucket::Overdue
    } else if d == today {
        DueBucket::DueToday
    } else {
        DueBucket::Upcoming
    })
}

/// Parse a deadline from user input: YYYY-MM-DD, "today" or "in Nd".
pub fn parse_deadline_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();
    let today = Local::now().date_naive();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + chrono::Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(nd) = rest.strip_suffix('d') {
            if let Ok(days) = nd.trim().parse::<i64>() {
                return Some(today + chrono::Duration::days(days));
            }
        }
        if let Some(nw) = rest.strip_suffix('w') {
            if let Ok(weeks) = nw.trim().parse::<i64>() {
                return Some(today + chrono::Duration::weeks(weeks));
            }
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a deadline relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_deadline_relative(deadline: Option<NaiveDate>, today: NaiveDate) -> String {
    match deadline {
        None => "-".into(),
        Some(d) => {
            let days = (d - today).num_days();
            if days == 0 {
                "today".into()
            } else if days == 1 {
                "tomorrow".into()
            } else if days > 1 {
                format!("in {}d", days)
            } else {
                format!("{}d late", -days)
            }
        }
    }
}

/// Format a status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Pending => "Pending",
        Status::InProgress => "InProgress",
        Status::Completed => "Completed",
    }
}

/// Print tasks in a formatted table with completion percentages.
pub fn print_task_table(tasks: &[&Task]) {
    println!(
        "{:<10} {:<11} {:<6} {:<12} {:<10} {}",
        "ID", "Status", "Done", "Deadline", "Step", "Title"
    );
    let today = Local::now().date_naive();
    for t in tasks {
        println!(
            "{:<10} {:<11} {:<6} {:<12} {:<10} {}",
            t.id,
            format_status(t.status),
            format!("{}%", task_completion(t)),
            format_deadline_relative(t.deadline, today),
            t.step_id.as_deref().unwrap_or("-"),
            t.title
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Subtask};

    fn store_with_tasks(titles: &[&str]) -> JourneyStore {
        let mut store = JourneyStore::default();
        for title in titles {
            let id = store.next_task_id();
            store.tasks.push(Task {
                id,
                title: title.to_string(),
                description: String::new(),
                status: Status::Pending,
                categories: vec![],
                resources: vec![],
                deadline: None,
                step_id: None,
            });
        }
        store
    }

    #[test]
    fn id_generation_is_unique_across_kinds() {
        let mut store = JourneyStore::default();
        let ids = vec![
            store.next_task_id(),
            store.next_category_id(),
            store.next_subtask_id(),
            store.next_task_id(),
        ];
        assert_eq!(ids, vec!["task-1", "cat-2", "sub-3", "task-4"]);
    }

    #[test]
    fn resolves_by_id_then_title() {
        let store = store_with_tasks(&["Find a niche", "Build a landing page"]);
        assert_eq!(resolve_task_identifier("task-1", &store).unwrap(), "task-1");
        assert_eq!(
            resolve_task_identifier("build a landing page", &store).unwrap(),
            "task-2"
        );
        assert!(resolve_task_identifier("no such task", &store).is_err());
    }

    #[test]
    fn ambiguous_title_is_an_error() {
        let store = store_with_tasks(&["Write plan", "Write plan"]);
        let err = resolve_task_identifier("write plan", &store).unwrap_err();
        assert!(err.contains("task-1"));
        assert!(err.contains("task-2"));
    }

    #[test]
    fn due_buckets() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let day = |d| NaiveDate::from_ymd_opt(2026, 8, d);
        assert_eq!(due_bucket(day(29), today), Some(DueBucket::Overdue));
        assert_eq!(due_bucket(day(30), today), Some(DueBucket::DueToday));
        assert_eq!(due_bucket(day(31), today), Some(DueBucket::Upcoming));
        assert_eq!(due_bucket(None, today), None);
    }

    #[test]
    fn deadline_relative_formatting() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let day = |d| NaiveDate::from_ymd_opt(2026, 9, d);
        assert_eq!(format_deadline_relative(None, today), "-");
        assert_eq!(format_deadline_relative(day(2), today), "in 3d");
        assert_eq!(
            format_deadline_relative(NaiveDate::from_ymd_opt(2026, 8, 28), today),
            "2d late"
        );
    }

    #[test]
    fn parse_deadline_accepts_iso_and_relative() {
        assert_eq!(
            parse_deadline_input("2026-12-01"),
            NaiveDate::from_ymd_opt(2026, 12, 1)
        );
        let today = Local::now().date_naive();
        assert_eq!(parse_deadline_input("today"), Some(today));
        assert_eq!(
            parse_deadline_input("in 3d"),
            Some(today + chrono::Duration::days(3))
        );
        assert_eq!(parse_deadline_input("garbage"), None);
    }

    #[test]
    fn malformed_file_falls_back_to_default() {
        let dir = std::env::temp_dir().join("vj-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken_journey.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JourneyStore::load(&path);
        assert!(store.is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = std::env::temp_dir().join("vj-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip_journey.json");

        let mut store = store_with_tasks(&["Survey customers"]);
        let tid = store.tasks[0].id.clone();
        let cid = store.next_category_id();
        let sid = store.next_subtask_id();
        store.tasks[0].categories.push(Category {
            id: cid,
            title: "Outreach".into(),
            subtasks: vec![Subtask { id: sid, title: "Email list".into(), completed: true }],
            collapsed: false,
        });
        store.tasks[0].deadline = NaiveDate::from_ymd_opt(2026, 10, 1);
        store.save(&path).unwrap();

        let loaded = JourneyStore::load(&path);
        assert_eq!(loaded.tasks.len(), 1);
        assert_eq!(loaded.tasks[0].id, tid);
        assert_eq!(loaded.tasks[0].deadline, NaiveDate::from_ymd_opt(2026, 10, 1));
        assert_eq!(loaded.next_id, store.next_id);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn put_task_replaces_by_id() {
        let mut store = store_with_tasks(&["Old title"]);
        let mut t = store.tasks[0].clone();
        t.title = "New title".into();
        store.put_task(t);
        assert_eq!(store.tasks[0].title, "New title");
    }
}
