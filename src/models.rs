//! Frontend Models
//!
//! Records as the planner backend serializes them. The server emits
//! untagged struct fields, so keys arrive in PascalCase (`ID`, `Title`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque record identifier, placed verbatim (percent-encoded) in URL paths
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    #[serde(rename = "ID")]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// `YYYY-MM-DD` part of the due timestamp
    pub fn due_day(&self) -> &str {
        day_part(&self.due_date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Priority {
    #[serde(rename = "ID")]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub date: String,
}

impl Priority {
    pub fn day(&self) -> &str {
        day_part(&self.date)
    }
}

/// Contact task: someone to call, email, or text today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "Type")]
    pub contact_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub date: String,
}

impl Contact {
    pub fn day(&self) -> &str {
        day_part(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaterIntake {
    #[serde(default)]
    pub glasses: i32,
    #[serde(default = "default_target")]
    pub target: i32,
}

impl Default for WaterIntake {
    fn default() -> Self {
        Self {
            glasses: 0,
            target: default_target(),
        }
    }
}

fn default_target() -> i32 {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Thought {
    pub content: String,
    #[serde(default)]
    pub date: String,
}

fn day_part(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
