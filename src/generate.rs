//! Journey seeding: the static phase template and the business-profile-driven
//! task generator.
//!
//! The generator is deliberately simple. It matches keywords in the free-text
//! business description against a catalog of canned task templates, always
//! emitting a base set so every journey starts with something actionable.
//! Emitted tasks always reference a step of the default phases, and carry at
//! least one category whenever they have subtasks.

use chrono::{Duration, Local};

use crate::fields::Status;
use crate::model::{Category, Phase, Step, Subtask, Task};
use crate::store::JourneyStore;

/// The default journey template: four phases from idea to scale.
pub fn default_phases() -> Vec<Phase> {
    fn step(id: &str, title: &str, description: &str, resources: &[&str]) -> Step {
        Step {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status: Status::Pending,
            resources: resources.iter().map(|r| r.to_string()).collect(),
        }
    }

    vec![
        Phase {
            id: "phase-discovery".into(),
            title: "Discovery".into(),
            description: "Sharpen the idea and understand the market.".into(),
            steps: vec![
                step(
                    "step-idea",
                    "Clarify your idea",
                    "Write down the problem, the customer and the offer in one page.",
                    &["Lean Canvas template"],
                ),
                step(
                    "step-market",
                    "Research the market",
                    "Size the market and map who already serves it.",
                    &["Competitor matrix worksheet"],
                ),
            ],
        },
        Phase {
            id: "phase-validation".into(),
            title: "Validation".into(),
            description: "Test the riskiest assumptions with real customers.".into(),
            steps: vec![
                step(
                    "step-customers",
                    "Talk to customers",
                    "Interview potential customers before building anything.",
                    &["The Mom Test interview guide"],
                ),
                step(
                    "step-prototype",
                    "Build a prototype",
                    "Ship the smallest thing that lets someone say yes or no.",
                    &[],
                ),
            ],
        },
        Phase {
            id: "phase-launch".into(),
            title: "Launch".into(),
            description: "Make it legal, make it public.".into(),
            steps: vec![
                step(
                    "step-setup",
                    "Set up the business",
                    "Registration, bank account, basic bookkeeping.",
                    &["Local registration checklist"],
                ),
                step(
                    "step-launch",
                    "Go to market",
                    "Put the offer in front of strangers and take the first orders.",
                    &[],
                ),
            ],
        },
        Phase {
            id: "phase-growth".into(),
            title: "Growth".into(),
            description: "Measure what works and do more of it.".into(),
            steps: vec![
                step(
                    "step-metrics",
                    "Measure and iterate",
                    "Pick a handful of numbers and review them weekly.",
                    &[],
                ),
                step(
                    "step-scale",
                    "Scale operations",
                    "Delegate, automate and widen the funnel.",
                    &[],
                ),
            ],
        },
    ]
}

struct TaskSeed {
    title: &'static str,
    description: &'static str,
    step_id: &'static str,
    deadline_days: i64,
    /// Empty keyword list means the seed is always emitted.
    keywords: &'static [&'static str],
    categories: &'static [(&'static str, &'static [&'static str])],
    resources: &'static [&'static str],
}

fn seed_catalog() -> Vec<TaskSeed> {
    vec![
        TaskSeed {
            title: "Write a one-page business plan",
            description: "Problem, customer, offer, pricing and channel on a single page.",
            step_id: "step-idea",
            deadline_days: 7,
            keywords: &[],
            categories: &[(
                "Plan sections",
                &["Describe the problem", "Describe the customer", "Sketch the pricing"],
            )],
            resources: &["Lean Canvas template"],
        },
        TaskSeed {
            title: "Map the competition",
            description: "Find the five closest alternatives your customers use today.",
            step_id: "step-market",
            deadline_days: 14,
            keywords: &[],
            categories: &[(
                "Research",
                &["List five competitors", "Note their pricing", "Note their weaknesses"],
            )],
            resources: &[],
        },
        TaskSeed {
            title: "Interview ten potential customers",
            description: "Learn how they solve the problem today and what they pay.",
            step_id: "step-customers",
            deadline_days: 21,
            keywords: &[],
            categories: &[(
                "Interviews",
                &["Draft interview questions", "Schedule ten conversations", "Summarise findings"],
            )],
            resources: &["The Mom Test interview guide"],
        },
        TaskSeed {
            title: "Launch a landing page",
            description: "A single page that explains the offer and collects signups.",
            step_id: "step-launch",
            deadline_days: 28,
            keywords: &["online", "app", "website", "digital", "saas", "software"],
            categories: &[(
                "Page",
                &["Write the headline", "Set up the signup form", "Connect analytics"],
            )],
            resources: &[],
        },
        TaskSeed {
            title: "Build a physical prototype",
            description: "A rough version of the product you can put in someone's hands.",
            step_id: "step-prototype",
            deadline_days: 35,
            keywords: &["product", "manufactur", "hardware", "craft"],
            categories: &[(
                "Prototype",
                &["Source materials", "Assemble first unit", "Collect feedback from three users"],
            )],
            resources: &[],
        },
        TaskSeed {
            title: "Find and secure a location",
            description: "Shortlist spaces, compare rents, check footfall.",
            step_id: "step-setup",
            deadline_days: 42,
            keywords: &["shop", "store", "retail", "cafe", "restaurant", "salon"],
            categories: &[(
                "Location",
                &["Shortlist three spaces", "Visit each space", "Check permit requirements"],
            )],
            resources: &["Local registration checklist"],
        },
        TaskSeed {
            title: "Design the service workflow",
            description: "Write down every touchpoint from enquiry to delivery.",
            step_id: "step-prototype",
            deadline_days: 35,
            keywords: &["service", "consult", "agency", "coach"],
            categories: &[],
            resources: &[],
        },
    ]
}

/// Generate tasks for a journey from a free-text business profile.
///
/// The always-on seeds are emitted for every profile; keyword seeds are added
/// when the profile mentions one of their trigger words. Returns the number
/// of tasks added. An empty profile is a validation failure, not a panic.
pub fn seed_journey(store: &mut JourneyStore, profile: &str) -> Result<usize, String> {
    let profile = profile.trim().to_lowercase();
    if profile.is_empty() {
        return Err("Business profile must not be empty".into());
    }

    if store.phases.is_empty() {
        store.phases = default_phases();
    }

    let today = Local::now().date_naive();
    let mut added = 0;

    for seed in seed_catalog() {
        let wanted =
            seed.keywords.is_empty() || seed.keywords.iter().any(|kw| profile.contains(kw));
        if !wanted {
            continue;
        }

        let id = store.next_task_id();
        let mut categories = Vec::new();
        for (cat_title, subtitles) in seed.categories {
            let cat_id = store.next_category_id();
            let mut subtasks = Vec::new();
            for subtitle in *subtitles {
                subtasks.push(Subtask {
                    id: store.next_subtask_id(),
                    title: subtitle.to_string(),
                    completed: false,
                });
            }
            categories.push(Category {
                id: cat_id,
                title: cat_title.to_string(),
                subtasks,
                collapsed: false,
            });
        }

        store.tasks.push(Task {
            id,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            status: Status::Pending,
            categories,
            resources: seed.resources.iter().map(|r| r.to_string()).collect(),
            deadline: Some(today + Duration::days(seed.deadline_days)),
            step_id: Some(seed.step_id.to_string()),
        });
        added += 1;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn empty_profile_is_rejected() {
        let mut store = JourneyStore::default();
        assert!(seed_journey(&mut store, "   ").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn every_profile_gets_the_base_tasks() {
        let mut store = JourneyStore::default();
        let added = seed_journey(&mut store, "handmade pottery").unwrap();
        assert!(added >= 3);
        assert!(store.tasks.iter().any(|t| t.title.contains("business plan")));
        assert!(store.tasks.iter().any(|t| t.title.contains("competition")));
        assert_eq!(store.phases.len(), 4);
    }

    #[test]
    fn keywords_select_extra_templates() {
        let mut plain = JourneyStore::default();
        seed_journey(&mut plain, "dog walking").unwrap();
        let mut online = JourneyStore::default();
        seed_journey(&mut online, "an online booking app for dog walking").unwrap();
        assert!(online.tasks.len() > plain.tasks.len());
        assert!(online.tasks.iter().any(|t| t.title.contains("landing page")));
    }

    #[test]
    fn generated_records_are_well_formed() {
        let mut store = JourneyStore::default();
        seed_journey(&mut store, "a retail cafe with an online store").unwrap();

        let step_ids: HashSet<&str> = store
            .phases
            .iter()
            .flat_map(|p| p.steps.iter().map(|s| s.id.as_str()))
            .collect();

        let mut seen_ids = HashSet::new();
        for t in &store.tasks {
            assert!(seen_ids.insert(t.id.clone()), "duplicate task id {}", t.id);
            // Back-references must resolve into the default phases.
            let step = t.step_id.as_deref().expect("generated task without step");
            assert!(step_ids.contains(step), "unknown step {step}");
            assert_eq!(t.status, Status::Pending);
            assert!(t.deadline.is_some());
            for c in &t.categories {
                assert!(seen_ids.insert(c.id.clone()), "duplicate category id {}", c.id);
                for s in &c.subtasks {
                    assert!(seen_ids.insert(s.id.clone()), "duplicate subtask id {}", s.id);
                    assert!(!s.completed);
                }
            }
        }
    }

    #[test]
    fn seeding_twice_keeps_ids_unique() {
        let mut store = JourneyStore::default();
        seed_journey(&mut store, "pottery").unwrap();
        seed_journey(&mut store, "pottery").unwrap();
        let mut ids = HashSet::new();
        for t in &store.tasks {
            assert!(ids.insert(t.id.clone()));
        }
    }
}
