//! Thought Commands
//!
//! Frontend bindings for `/planner/thought`.

use serde::Serialize;

use super::{check_reply, fetch_json, submit, ApiRequest, Transport};
use crate::error::{PlannerError, PlannerResult};
use crate::models::Thought;

pub const THOUGHT_PATH: &str = "/planner/thought";
pub const GENERATE_THOUGHT_PATH: &str = "/planner/thought/generate";

#[derive(Serialize)]
struct AddThoughtArgs<'a> {
    content: &'a str,
}

/// Today's thought, or `None` when the server has none yet.
///
/// The server answers a missing thought with `{"error": ...}`, so any
/// application error here means "nothing saved today".
pub async fn get_today_thought<T: Transport>(transport: &T) -> PlannerResult<Option<Thought>> {
    match fetch_json(transport, THOUGHT_PATH).await {
        Ok(thought) => Ok(Some(thought)),
        Err(PlannerError::Api(message)) => {
            log::debug!("no thought for today: {}", message);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub async fn add_thought<T: Transport>(transport: &T, content: &str) -> PlannerResult<()> {
    submit(transport, ApiRequest::post(THOUGHT_PATH, &AddThoughtArgs { content })?).await
}

/// Ask the server for a fresh thought and return its text.
///
/// The server echoes an untagged record (`Content`); a lowercase `content`
/// key is accepted as well.
pub async fn generate_thought<T: Transport>(transport: &T) -> PlannerResult<String> {
    let reply = check_reply(transport.send(&ApiRequest::post_empty(GENERATE_THOUGHT_PATH)).await?)?;
    reply
        .get("content")
        .or_else(|| reply.get("Content"))
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or(PlannerError::MissingContent)
}
