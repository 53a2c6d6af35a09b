//! Planner Actions
//!
//! User-triggered flows: confirm (deletes only), send one request, then
//! reload the page, patch the thought text, or flash a notice. Nothing is
//! retried and no state is kept between calls.

use crate::commands::{self, CreateContactArgs, CreatePriorityArgs, CreateTodoArgs, Transport};
use crate::error::{PlannerError, PlannerResult};
use crate::models::RecordId;
use crate::notice::NoticeLevel;
use crate::page::Page;

pub const DELETE_TODO_PROMPT: &str = "Are you sure you want to delete this todo?";
pub const DELETE_PRIORITY_PROMPT: &str = "Are you sure you want to delete this priority?";
pub const DELETE_CONTACT_PROMPT: &str = "Are you sure you want to delete this contact task?";

// ========================
// Todos
// ========================

pub async fn add_todo<T: Transport, P: Page>(transport: &T, page: &P, args: &CreateTodoArgs<'_>) {
    settle(page, commands::create_todo(transport, args).await, "Failed to add todo");
}

pub async fn update_todo<T: Transport, P: Page>(transport: &T, page: &P, id: &RecordId, completed: bool) {
    settle(page, commands::update_todo(transport, id, completed).await, "Failed to update todo");
}

pub async fn delete_todo<T: Transport, P: Page>(transport: &T, page: &P, id: &RecordId) {
    if !page.confirm(DELETE_TODO_PROMPT) {
        return;
    }
    settle(page, commands::delete_todo(transport, id).await, "Failed to delete todo");
}

// ========================
// Priorities
// ========================

pub async fn add_priority<T: Transport, P: Page>(transport: &T, page: &P, args: &CreatePriorityArgs<'_>) {
    settle(page, commands::create_priority(transport, args).await, "Failed to add priority");
}

pub async fn update_priority<T: Transport, P: Page>(transport: &T, page: &P, id: &RecordId, completed: bool) {
    settle(page, commands::update_priority(transport, id, completed).await, "Failed to update priority");
}

pub async fn delete_priority<T: Transport, P: Page>(transport: &T, page: &P, id: &RecordId) {
    if !page.confirm(DELETE_PRIORITY_PROMPT) {
        return;
    }
    settle(page, commands::delete_priority(transport, id).await, "Failed to delete priority");
}

// ========================
// Contacts
// ========================

pub async fn add_contact<T: Transport, P: Page>(transport: &T, page: &P, args: &CreateContactArgs<'_>) {
    settle(page, commands::create_contact(transport, args).await, "Failed to add contact");
}

pub async fn update_contact<T: Transport, P: Page>(transport: &T, page: &P, id: &RecordId, completed: bool) {
    settle(page, commands::update_contact(transport, id, completed).await, "Failed to update contact");
}

pub async fn delete_contact<T: Transport, P: Page>(transport: &T, page: &P, id: &RecordId) {
    if !page.confirm(DELETE_CONTACT_PROMPT) {
        return;
    }
    settle(page, commands::delete_contact(transport, id).await, "Failed to delete contact");
}

// ========================
// Water intake & thoughts
// ========================

pub async fn update_water_intake<T: Transport, P: Page>(transport: &T, page: &P, glasses: i32) {
    settle(page, commands::set_water_intake(transport, glasses).await, "Failed to update water intake");
}

pub async fn add_thought<T: Transport, P: Page>(transport: &T, page: &P, content: &str) {
    settle(page, commands::add_thought(transport, content).await, "Failed to add thought");
}

/// Swap a server-generated thought into the panel without reloading.
pub async fn generate_thought<T: Transport, P: Page>(transport: &T, page: &P) {
    match commands::generate_thought(transport).await {
        Ok(content) => page.show_thought(&content),
        Err(err) => report(page, &err, "Failed to generate thought"),
    }
}

// ========================
// Helpers
// ========================

fn settle<P: Page>(page: &P, result: PlannerResult<()>, failure: &str) {
    match result {
        Ok(()) => page.reload(),
        Err(err) => report(page, &err, failure),
    }
}

/// Server messages are shown as-is; anything else gets the fixed text.
fn report<P: Page>(page: &P, err: &PlannerError, failure: &str) {
    match err {
        PlannerError::Api(message) => {
            log::warn!("{}: {}", failure, message);
            page.notify(NoticeLevel::Error, message);
        }
        other => {
            log::error!("{}: {}", failure, other);
            page.notify(NoticeLevel::Error, failure);
        }
    }
}
