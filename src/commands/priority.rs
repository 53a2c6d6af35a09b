//! Priority Commands
//!
//! Frontend bindings for `/planner/priorities`.

use serde::Serialize;

use super::{fetch_json, record_path, submit, ApiRequest, CompletedArgs, Transport};
use crate::error::PlannerResult;
use crate::models::{Priority, RecordId};

pub const PRIORITIES_PATH: &str = "/planner/priorities";

#[derive(Debug, Serialize)]
pub struct CreatePriorityArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

pub async fn list_priorities<T: Transport>(transport: &T) -> PlannerResult<Vec<Priority>> {
    fetch_json(transport, PRIORITIES_PATH).await
}

pub async fn create_priority<T: Transport>(transport: &T, args: &CreatePriorityArgs<'_>) -> PlannerResult<()> {
    submit(transport, ApiRequest::post(PRIORITIES_PATH, args)?).await
}

pub async fn update_priority<T: Transport>(transport: &T, id: &RecordId, completed: bool) -> PlannerResult<()> {
    submit(transport, ApiRequest::put(record_path(PRIORITIES_PATH, id), &CompletedArgs { completed })?).await
}

pub async fn delete_priority<T: Transport>(transport: &T, id: &RecordId) -> PlannerResult<()> {
    submit(transport, ApiRequest::delete(record_path(PRIORITIES_PATH, id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Method;
    use crate::test_support::FakeTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_create_priority_body() {
        let transport = FakeTransport::replying(json!({"ID": 5}));
        let args = CreatePriorityArgs { title: "Exercise", description: "30 min" };

        block_on(create_priority(&transport, &args)).unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/planner/priorities");
        assert_eq!(sent[0].body, Some(json!({"title": "Exercise", "description": "30 min"})));
    }

    #[test]
    fn test_update_and_delete_priority_paths() {
        let transport = FakeTransport::replying(json!({}));
        let id = RecordId::from(9u64);

        block_on(update_priority(&transport, &id, false)).unwrap();
        block_on(delete_priority(&transport, &id)).unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].path, "/planner/priorities/9");
        assert_eq!(sent[0].body, Some(json!({"completed": false})));
        assert_eq!(sent[1].method, Method::Delete);
        assert_eq!(sent[1].path, "/planner/priorities/9");
    }
}
