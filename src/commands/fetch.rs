//! Fetch Transport
//!
//! Sends planner requests through `window.fetch`.

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::{ApiRequest, Transport};
use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};

#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    config: PlannerConfig,
}

impl FetchTransport {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    fn build_request(&self, request: &ApiRequest) -> PlannerResult<Request> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());

        if let Some(body) = &request.body {
            let headers = Headers::new().map_err(|e| PlannerError::from_js("headers", e))?;
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| PlannerError::from_js("headers", e))?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(&body.to_string()));
        }

        Request::new_with_str_and_init(&self.config.api_url(&request.path), &init)
            .map_err(|e| PlannerError::from_js("request", e))
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> PlannerResult<Value> {
        let window = web_sys::window()
            .ok_or_else(|| PlannerError::Transport("no window".to_string()))?;
        let js_request = self.build_request(request)?;

        let response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(|e| PlannerError::from_js("fetch", e))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| PlannerError::from_js("response", e))?;

        let text = response
            .text()
            .map_err(|e| PlannerError::from_js("body", e))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| PlannerError::from_js("body", e))?;
        let text = text
            .as_string()
            .ok_or_else(|| PlannerError::Decode("body is not text".to_string()))?;

        log::debug!("{} {} -> {}", request.method.as_str(), request.path, response.status());
        Ok(serde_json::from_str(&text)?)
    }
}
