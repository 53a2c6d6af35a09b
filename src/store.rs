//! Planner State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! rebuilt from the server on every page load; nothing here outlives a reload.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Contact, Priority, Thought, Todo, WaterIntake};
use crate::notice::{NoticeBoard, NoticeLevel, Notices};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PlannerState {
    pub todos: Vec<Todo>,
    pub priorities: Vec<Priority>,
    pub contacts: Vec<Contact>,
    pub water_intake: WaterIntake,
    /// Text node of the thought panel
    pub thought_content: String,
    /// Whether the creation forms are expanded
    pub show_forms: bool,
    pub notices: Notices,
}

/// Type alias for the store
pub type PlannerStore = Store<PlannerState>;

/// Get the planner store from context
pub fn use_planner_store() -> PlannerStore {
    expect_context::<PlannerStore>()
}

/// Forms open by default while any section of today's plan is still empty.
pub fn needs_forms(todos: &[Todo], priorities: &[Priority], contacts: &[Contact], thought: Option<&Thought>) -> bool {
    todos.is_empty()
        || priorities.is_empty()
        || contacts.is_empty()
        || thought.map_or(true, |t| t.content.is_empty())
}

impl NoticeBoard for PlannerStore {
    fn post(&self, level: NoticeLevel, message: String) -> u32 {
        self.notices().write().push(level, message)
    }

    fn dismiss(&self, id: u32) {
        self.notices().write().dismiss(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            description: String::new(),
            due_date: "2024-05-01T00:00:00Z".to_string(),
            completed: false,
        }
    }

    fn priority(id: u64) -> Priority {
        Priority {
            id,
            title: "Focus".to_string(),
            description: String::new(),
            completed: false,
            date: "2024-05-01T00:00:00Z".to_string(),
        }
    }

    fn contact(id: u64) -> Contact {
        Contact {
            id,
            name: "Sam".to_string(),
            contact_type: "Call".to_string(),
            description: String::new(),
            completed: false,
            date: "2024-05-01T00:00:00Z".to_string(),
        }
    }

    fn thought(content: &str) -> Thought {
        Thought { content: content.to_string(), date: String::new() }
    }

    #[test]
    fn test_full_plan_hides_forms() {
        let t = thought("Be kind");
        assert!(!needs_forms(&[todo(1)], &[priority(1)], &[contact(1)], Some(&t)));
    }

    #[test]
    fn test_any_empty_section_shows_forms() {
        let t = thought("Be kind");
        assert!(needs_forms(&[], &[priority(1)], &[contact(1)], Some(&t)));
        assert!(needs_forms(&[todo(1)], &[], &[contact(1)], Some(&t)));
        assert!(needs_forms(&[todo(1)], &[priority(1)], &[], Some(&t)));
        assert!(needs_forms(&[todo(1)], &[priority(1)], &[contact(1)], None));
        assert!(needs_forms(&[todo(1)], &[priority(1)], &[contact(1)], Some(&thought(""))));
    }
}
