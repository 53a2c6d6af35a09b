//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::FetchTransport;
use crate::config::PlannerConfig;
use crate::page::BrowserPage;
use crate::store::PlannerStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<PlannerConfig>,
    store: PlannerStore,
}

impl AppContext {
    pub fn new(config: PlannerConfig, store: PlannerStore) -> Self {
        Self {
            config: StoredValue::new(config),
            store,
        }
    }

    /// Transport for one action
    pub fn transport(&self) -> FetchTransport {
        FetchTransport::new(self.config.get_value())
    }

    /// Page effects bound to this store
    pub fn page(&self) -> BrowserPage {
        BrowserPage::new(self.store, self.config.with_value(|c| c.notice_timeout_ms))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
