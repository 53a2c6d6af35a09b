//! Planner Configuration
//!
//! Optional JSON embedded in the host page:
//!
//! ```html
//! <script id="planner-config" type="application/json">
//!   { "api_base": "", "notice_timeout_ms": 5000, "log_level": "info" }
//! </script>
//! ```
//!
//! Missing keys fall back to their defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Element id of the embedded config block
pub const CONFIG_ELEMENT_ID: &str = "planner-config";

/// How long a notice stays on screen
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Prefix for every request path. Empty means same origin.
    pub api_base: String,
    pub notice_timeout_ms: u32,
    pub log_level: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
            log_level: "info".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json(raw: &str) -> PlannerResult<Self> {
        serde_json::from_str(raw).map_err(|e| PlannerError::Config(e.to_string()))
    }

    /// Read the config block from the current document.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(raw) = raw else {
            log::debug!("no #{} element, using defaults", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring page config: {}", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Join `api_base` and an absolute request path.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
