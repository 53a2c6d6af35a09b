//! Page Effects
//!
//! Everything an action does to the page once its request settles.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notice::{self, NoticeLevel};
use crate::store::{PlannerStateStoreFields, PlannerStore};

pub trait Page {
    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
    /// Discard client state and load the page again.
    fn reload(&self);
    /// Flash a transient notice.
    fn notify(&self, level: NoticeLevel, message: &str);
    /// Replace the thought text in place.
    fn show_thought(&self, content: &str);
}

/// The live document
#[derive(Clone, Copy)]
pub struct BrowserPage {
    store: PlannerStore,
    notice_timeout_ms: u32,
}

impl BrowserPage {
    pub fn new(store: PlannerStore, notice_timeout_ms: u32) -> Self {
        Self { store, notice_timeout_ms }
    }
}

impl Page for BrowserPage {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }

    fn notify(&self, level: NoticeLevel, message: &str) {
        let store = self.store;
        let message = message.to_string();
        let delay = TimeoutFuture::new(self.notice_timeout_ms);
        spawn_local(async move {
            notice::flash(&store, level, message, delay).await;
        });
    }

    fn show_thought(&self, content: &str) {
        self.store.thought_content().set(content.to_string());
    }
}
