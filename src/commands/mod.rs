//! Planner Command Wrappers
//!
//! Frontend bindings to the planner REST endpoints, organized by domain.
//! Every command issues exactly one request through a [`Transport`] and
//! inspects the reply for an `error` field.

mod contact;
mod fetch;
mod priority;
mod thought;
mod todo;
mod water;

use std::future::Future;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::Value;

use crate::error::{PlannerError, PlannerResult};
use crate::models::RecordId;

// Re-export all public items
pub use contact::*;
pub use fetch::FetchTransport;
pub use priority::*;
pub use thought::*;
pub use todo::*;
pub use water::*;

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single planner request, independent of how it is sent
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    /// POST without a body
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: None }
    }

    pub fn post<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> PlannerResult<Self> {
        Ok(Self { method: Method::Post, path: path.into(), body: Some(serde_json::to_value(body)?) })
    }

    pub fn put<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> PlannerResult<Self> {
        Ok(Self { method: Method::Put, path: path.into(), body: Some(serde_json::to_value(body)?) })
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }
}

/// Sends a request and yields the parsed JSON body.
///
/// The HTTP status is not part of the contract: the body alone decides
/// success. A rejected request or a non-JSON body is an `Err`.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> impl Future<Output = PlannerResult<Value>>;
}

// ========================
// Shared Argument Structs
// ========================

#[derive(Serialize)]
struct CompletedArgs {
    completed: bool,
}

// ========================
// Helpers
// ========================

/// `{collection}/{id}` with the id escaped as a single path segment
pub(crate) fn record_path(collection: &str, id: &RecordId) -> String {
    format!("{}/{}", collection, utf8_percent_encode(id.as_str(), PATH_SEGMENT))
}

/// Turn a reply carrying a truthy `error` field into `PlannerError::Api`.
pub(crate) fn check_reply(reply: Value) -> PlannerResult<Value> {
    match reply.get("error") {
        Some(error) if is_truthy(error) => {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Err(PlannerError::Api(message))
        }
        _ => Ok(reply),
    }
}

/// Send a mutation and discard the echoed record.
pub(crate) async fn submit<T: Transport>(transport: &T, request: ApiRequest) -> PlannerResult<()> {
    log::debug!("{} {}", request.method.as_str(), request.path);
    check_reply(transport.send(&request).await?)?;
    Ok(())
}

pub(crate) async fn fetch_json<T, R>(transport: &T, path: &str) -> PlannerResult<R>
where
    T: Transport,
    R: serde::de::DeserializeOwned,
{
    let reply = check_reply(transport.send(&ApiRequest::get(path)).await?)?;
    Ok(serde_json::from_value(reply)?)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_reply_error_field() {
        let err = check_reply(json!({"error": "Todo not found"})).unwrap_err();
        assert_eq!(err, PlannerError::Api("Todo not found".to_string()));
    }

    #[test]
    fn test_check_reply_success_shapes() {
        assert!(check_reply(json!({})).is_ok());
        assert!(check_reply(json!({"message": "Todo deleted successfully"})).is_ok());
        assert!(check_reply(json!([{"ID": 1}])).is_ok());
        assert!(check_reply(json!(null)).is_ok());
    }

    #[test]
    fn test_check_reply_falsy_error_is_success() {
        assert!(check_reply(json!({"error": ""})).is_ok());
        assert!(check_reply(json!({"error": null})).is_ok());
        assert!(check_reply(json!({"error": false})).is_ok());
    }

    #[test]
    fn test_check_reply_non_string_error() {
        let err = check_reply(json!({"error": {"code": 3}})).unwrap_err();
        assert_eq!(err, PlannerError::Api(r#"{"code":3}"#.to_string()));
    }

    #[test]
    fn test_record_path_escapes_segment() {
        assert_eq!(record_path("/planner/todos", &RecordId::from(42u64)), "/planner/todos/42");
        assert_eq!(record_path("/planner/todos", &RecordId::from("a/b c")), "/planner/todos/a%2Fb%20c");
    }

    #[test]
    fn test_post_serializes_body() {
        let request = ApiRequest::post("/planner/thought", &json!({"content": "hi"})).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body, Some(json!({"content": "hi"})));
    }

    struct Canned(Value);

    impl Transport for Canned {
        fn send(&self, _request: &ApiRequest) -> impl Future<Output = PlannerResult<Value>> {
            std::future::ready(Ok(self.0.clone()))
        }
    }

    #[test]
    fn test_transport_without_async_fn() {
        let ok = Canned(json!({"message": "Todo deleted successfully"}));
        assert!(futures::executor::block_on(submit(&ok, ApiRequest::delete("/planner/todos/1"))).is_ok());

        let failed = Canned(json!({"error": "Todo not found"}));
        let err = futures::executor::block_on(submit(&failed, ApiRequest::get("/planner/todos"))).unwrap_err();
        assert_eq!(err, PlannerError::Api("Todo not found".to_string()));
    }
}
