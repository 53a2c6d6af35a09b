//! Test doubles for the transport and page seams.

use std::cell::{Cell, RefCell};

use serde_json::Value;

use crate::commands::{ApiRequest, Transport};
use crate::error::{PlannerError, PlannerResult};
use crate::notice::NoticeLevel;
use crate::page::Page;

/// Records every request and answers each with the same reply
pub struct FakeTransport {
    sent: RefCell<Vec<ApiRequest>>,
    reply: PlannerResult<Value>,
}

impl FakeTransport {
    pub fn replying(reply: Value) -> Self {
        Self { sent: RefCell::new(Vec::new()), reply: Ok(reply) }
    }

    pub fn failing(err: PlannerError) -> Self {
        Self { sent: RefCell::new(Vec::new()), reply: Err(err) }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: &ApiRequest) -> PlannerResult<Value> {
        self.sent.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}

/// Records page effects; answers prompts with a fixed choice
pub struct FakePage {
    accept_prompts: bool,
    pub prompts: RefCell<Vec<String>>,
    pub reloads: Cell<u32>,
    pub notices: RefCell<Vec<(NoticeLevel, String)>>,
    pub thought: RefCell<Option<String>>,
}

impl FakePage {
    pub fn new(accept_prompts: bool) -> Self {
        Self {
            accept_prompts,
            prompts: RefCell::new(Vec::new()),
            reloads: Cell::new(0),
            notices: RefCell::new(Vec::new()),
            thought: RefCell::new(None),
        }
    }

    pub fn accepting() -> Self {
        Self::new(true)
    }

    pub fn declining() -> Self {
        Self::new(false)
    }

    pub fn notice_messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|(_, m)| m.clone()).collect()
    }
}

impl Page for FakePage {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.accept_prompts
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }

    fn show_thought(&self, content: &str) {
        *self.thought.borrow_mut() = Some(content.to_string());
    }
}
