//! Todo Commands
//!
//! Frontend bindings for `/planner/todos`.

use serde::Serialize;

use super::{fetch_json, record_path, submit, ApiRequest, CompletedArgs, Transport};
use crate::error::PlannerResult;
use crate::models::{RecordId, Todo};

pub const TODOS_PATH: &str = "/planner/todos";

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// `YYYY-MM-DD`, as produced by a date input
    #[serde(rename = "dueDate")]
    pub due_date: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_todos<T: Transport>(transport: &T) -> PlannerResult<Vec<Todo>> {
    fetch_json(transport, TODOS_PATH).await
}

pub async fn create_todo<T: Transport>(transport: &T, args: &CreateTodoArgs<'_>) -> PlannerResult<()> {
    submit(transport, ApiRequest::post(TODOS_PATH, args)?).await
}

pub async fn update_todo<T: Transport>(transport: &T, id: &RecordId, completed: bool) -> PlannerResult<()> {
    submit(transport, ApiRequest::put(record_path(TODOS_PATH, id), &CompletedArgs { completed })?).await
}

pub async fn delete_todo<T: Transport>(transport: &T, id: &RecordId) -> PlannerResult<()> {
    submit(transport, ApiRequest::delete(record_path(TODOS_PATH, id))).await
}
