//! Notices
//!
//! Transient, dismissible alerts shown at the top of the page container.
//! A flashed notice stays until its delay elapses, then disappears.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }

    /// CSS classes of the notice element
    pub fn class(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}

/// Visible notices, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notices {
    entries: Vec<Notice>,
    next_id: u32,
}

impl Notices {
    /// Prepend a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.insert(0, Notice { id, level, message });
        id
    }

    /// Remove a notice. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Somewhere notices can be posted and taken down
pub trait NoticeBoard {
    fn post(&self, level: NoticeLevel, message: String) -> u32;
    fn dismiss(&self, id: u32);
}

/// Show a notice until `delay` resolves, then remove it.
pub async fn flash<B, D>(board: &B, level: NoticeLevel, message: String, delay: D)
where
    B: NoticeBoard + ?Sized,
    D: Future<Output = ()>,
{
    let id = board.post(level, message);
    delay.await;
    board.dismiss(id);
}
