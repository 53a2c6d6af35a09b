//! Dashboard Loading
//!
//! One fetch per section on mount. A failed section degrades to empty (or
//! the default water record) and is logged; it never blocks the others.
//! List endpoints may return records from other days, so lists are narrowed
//! to today's UTC date before they reach the store.

use crate::commands::{self, Transport};
use crate::error::PlannerResult;
use crate::models::{Contact, Priority, Thought, Todo, WaterIntake};
use crate::store::{needs_forms, PlannerState};

/// Raw per-section results of a dashboard fetch
#[derive(Debug)]
pub struct DashboardLoad {
    pub todos: PlannerResult<Vec<Todo>>,
    pub priorities: PlannerResult<Vec<Priority>>,
    pub contacts: PlannerResult<Vec<Contact>>,
    pub water_intake: PlannerResult<WaterIntake>,
    pub thought: PlannerResult<Option<Thought>>,
}

pub async fn fetch_dashboard<T: Transport>(transport: &T) -> DashboardLoad {
    DashboardLoad {
        todos: commands::list_todos(transport).await,
        priorities: commands::list_priorities(transport).await,
        contacts: commands::list_contacts(transport).await,
        water_intake: commands::get_water_intake(transport).await,
        thought: commands::get_today_thought(transport).await,
    }
}

impl DashboardLoad {
    /// Build the initial store state for `today` (`YYYY-MM-DD`).
    pub fn into_state(self, today: &str) -> PlannerState {
        let todos: Vec<Todo> = or_logged(self.todos, "todos")
            .into_iter()
            .filter(|t| t.due_day() == today)
            .collect();
        let priorities: Vec<Priority> = or_logged(self.priorities, "priorities")
            .into_iter()
            .filter(|p| p.day() == today)
            .collect();
        let contacts: Vec<Contact> = or_logged(self.contacts, "contacts")
            .into_iter()
            .filter(|c| c.day() == today)
            .collect();
        let water_intake = or_logged(self.water_intake, "water intake");
        let thought = or_logged(self.thought, "thought");

        log::info!(
            "Loaded {} todos, {} priorities, {} contacts for {}",
            todos.len(),
            priorities.len(),
            contacts.len(),
            today
        );

        PlannerState {
            show_forms: needs_forms(&todos, &priorities, &contacts, thought.as_ref()),
            thought_content: thought.map(|t| t.content).unwrap_or_default(),
            water_intake,
            todos,
            priorities,
            contacts,
            ..Default::default()
        }
    }
}

/// Current UTC date as `YYYY-MM-DD`, the day the server stamps records with.
pub fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.get(..10).unwrap_or(&iso).to_string()
}

fn or_logged<V: Default>(result: PlannerResult<V>, section: &str) -> V {
    result.unwrap_or_else(|e| {
        log::error!("Failed to load {}: {}", section, e);
        V::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::test_support::FakeTransport;
    use futures::executor::block_on;
    use serde_json::json;

    const TODAY: &str = "2024-05-01";

    fn todo(id: u64, due: &str) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            description: String::new(),
            due_date: due.to_string(),
            completed: false,
        }
    }

    fn priority(id: u64, date: &str) -> Priority {
        Priority {
            id,
            title: "Focus".to_string(),
            description: String::new(),
            completed: false,
            date: date.to_string(),
        }
    }

    fn contact(id: u64, date: &str) -> Contact {
        Contact {
            id,
            name: "Sam".to_string(),
            contact_type: "Call".to_string(),
            description: String::new(),
            completed: false,
            date: date.to_string(),
        }
    }

    fn thought(content: &str) -> Thought {
        Thought { content: content.to_string(), date: format!("{}T00:00:00Z", TODAY) }
    }

    #[test]
    fn test_lists_narrowed_to_today() {
        let load = DashboardLoad {
            todos: Ok(vec![todo(1, "2024-05-01T00:00:00Z"), todo(2, "2024-04-30T00:00:00Z")]),
            priorities: Ok(vec![priority(3, "2024-04-30T00:00:00Z"), priority(4, "2024-05-01T00:00:00Z")]),
            contacts: Ok(vec![contact(5, "2024-05-02T00:00:00Z"), contact(6, "2024-05-01T00:00:00Z")]),
            water_intake: Ok(WaterIntake { glasses: 4, target: 10 }),
            thought: Ok(Some(thought("Breathe"))),
        };

        let state = load.into_state(TODAY);

        assert_eq!(state.todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(state.priorities.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4]);
        assert_eq!(state.contacts.iter().map(|c| c.id).collect::<Vec<_>>(), vec![6]);
        assert_eq!(state.water_intake.glasses, 4);
        assert_eq!(state.thought_content, "Breathe");
        assert!(!state.show_forms);
    }

    #[test]
    fn test_only_stale_records_opens_forms() {
        let load = DashboardLoad {
            todos: Ok(vec![todo(1, "2024-05-01T00:00:00Z")]),
            priorities: Ok(vec![priority(2, "2024-04-30T00:00:00Z")]),
            contacts: Ok(vec![contact(3, "2024-05-01T00:00:00Z")]),
            water_intake: Ok(WaterIntake::default()),
            thought: Ok(Some(thought("Breathe"))),
        };

        let state = load.into_state(TODAY);

        assert!(state.priorities.is_empty());
        assert!(state.show_forms);
    }

    #[test]
    fn test_failed_sections_degrade() {
        let load = DashboardLoad {
            todos: Err(PlannerError::Transport("network down".to_string())),
            priorities: Ok(vec![priority(2, "2024-05-01T00:00:00Z")]),
            contacts: Err(PlannerError::Decode("expected value".to_string())),
            water_intake: Err(PlannerError::Api("boom".to_string())),
            thought: Err(PlannerError::Transport("network down".to_string())),
        };

        let state = load.into_state(TODAY);

        assert!(state.todos.is_empty());
        assert_eq!(state.priorities.len(), 1);
        assert!(state.contacts.is_empty());
        assert_eq!(state.water_intake, WaterIntake::default());
        assert_eq!(state.thought_content, "");
        assert!(state.show_forms);
    }

    #[test]
    fn test_missing_thought_is_empty_and_opens_forms() {
        let load = DashboardLoad {
            todos: Ok(vec![todo(1, "2024-05-01T00:00:00Z")]),
            priorities: Ok(vec![priority(2, "2024-05-01T00:00:00Z")]),
            contacts: Ok(vec![contact(3, "2024-05-01T00:00:00Z")]),
            water_intake: Ok(WaterIntake::default()),
            thought: Ok(None),
        };

        let state = load.into_state(TODAY);

        assert_eq!(state.thought_content, "");
        assert!(state.show_forms);
    }

    #[test]
    fn test_fetch_dashboard_all_errors_gives_empty_state() {
        let transport = FakeTransport::replying(json!({"error": "unauthorized"}));

        let load = block_on(fetch_dashboard(&transport));
        let paths: Vec<_> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec!["/planner/todos", "/planner/priorities", "/planner/contacts", "/planner/water-intake", "/planner/thought"]
        );
        assert!(matches!(load.thought, Ok(None)));

        let state = load.into_state(TODAY);
        assert!(state.todos.is_empty());
        assert!(state.priorities.is_empty());
        assert!(state.contacts.is_empty());
        assert_eq!(state.water_intake, WaterIntake::default());
        assert_eq!(state.thought_content, "");
        assert!(state.show_forms);
        assert!(state.notices.is_empty());
    }
}
