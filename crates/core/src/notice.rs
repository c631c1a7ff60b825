// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Non-blocking operator notifications.
//!
//! Notices replace blocking alert dialogs: the console publishes one for
//! every completed or failed operation and whatever front end is attached
//! subscribes and renders them inline. Publishing never waits on readers.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of notices buffered per subscriber.
/// Slow subscribers lose the oldest notices first.
const NOTICE_BUFFER_SIZE: usize = 64;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// An operation completed.
    Success,
    /// An operation failed; the message explains why.
    Error,
}

/// A message for the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Human-readable text.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub const fn success(message: String) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub const fn error(message: String) -> Self {
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }
}

/// Fan-out channel for notices.
#[derive(Debug, Clone)]
pub struct NoticeBus {
    tx: broadcast::Sender<Notice>,
}

impl NoticeBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(NOTICE_BUFFER_SIZE);
        Self { tx }
    }

    /// Publishes a notice to every current subscriber.
    ///
    /// With no subscribers the notice is dropped.
    pub fn publish(&self, notice: Notice) {
        match self.tx.send(notice) {
            Ok(count) => debug!(receivers = count, "Published notice"),
            Err(broadcast::error::SendError(notice)) => {
                debug!(?notice, "No receivers for notice");
            }
        }
    }

    /// Subscribes to notices published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }
}

impl Default for NoticeBus {
    fn default() -> Self {
        Self::new()
    }
}
