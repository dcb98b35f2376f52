//! Transient user notices (toasts).
//!
//! Notices are queued in posting order. Only the newest `max_visible` stay on screen;
//! the newest [`HISTORY_LIMIT`] are kept so callers (and the CLI) can report them.

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// Number of notices kept in the history.
pub const HISTORY_LIMIT: usize = 500;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.level, self.message)
    }
}

/// Bounded queue of visible notices plus the complete history.
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    visible: VecDeque<Notice>,
    history: VecDeque<Notice>,
    max_visible: usize,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(5)
    }
}

impl NoticeQueue {
    /// Creates a queue showing at most `max_visible` notices (at least one).
    pub fn new(max_visible: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            history: VecDeque::new(),
            max_visible: max_visible.max(1),
        }
    }

    /// Posts a notice; the oldest visible one is dropped when the queue is full.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice {
            level,
            message: message.into(),
        };
        match level {
            NoticeLevel::Error => log::warn!("Notice: {}", notice.message),
            NoticeLevel::Info | NoticeLevel::Success => log::info!("Notice: {}", notice.message),
        }

        if self.visible.len() == self.max_visible {
            self.visible.pop_front();
        }
        self.visible.push_back(notice.clone());
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(notice);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    /// Notices currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.visible.iter()
    }

    /// Posted notices, oldest first, capped at [`HISTORY_LIMIT`].
    pub fn history(&self) -> impl ExactSizeIterator<Item = &Notice> {
        self.history.iter()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.history.back()
    }

    /// Dismisses every visible notice. History is kept.
    pub fn dismiss_all(&mut self) {
        self.visible.clear();
    }
}
