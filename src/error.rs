//! Planner Errors
//!
//! Every failure a planner request can end in.

use thiserror::Error;

/// Result alias used by the command layer.
pub type PlannerResult<T> = Result<T, PlannerError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// The server answered with an `error` field.
    #[error("{0}")]
    Api(String),

    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("invalid response: {0}")]
    Decode(String),

    /// A generate-thought reply that carried neither `error` nor `content`.
    #[error("response has no content")]
    MissingContent,

    #[error("invalid config: {0}")]
    Config(String),
}

impl PlannerError {
    /// Wrap a rejected JS promise or failed web API call.
    pub fn from_js(context: &str, value: wasm_bindgen::JsValue) -> Self {
        PlannerError::Transport(format!("{}: {:?}", context, value))
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::Decode(err.to_string())
    }
}
