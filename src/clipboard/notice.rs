//! Transient notifications.
//!
//! Notices carry their own expiry; the shim schedules a timer tick so expired
//! notices disappear without further input.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Most recent notice wins; older ones are replaced rather than stacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notices {
    current: Option<Notice>,
    ttl: Duration,
}

impl Notices {
    #[must_use]
    pub fn new(ttl_secs: u32) -> Self {
        Self {
            current: None,
            ttl: Duration::seconds(i64::from(ttl_secs)),
        }
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now: DateTime<Utc>) {
        self.current = Some(Notice {
            kind,
            message: message.into(),
            expires_at: now + self.ttl,
        });
    }

    /// Drops the current notice if it has expired. Returns `true` if one was removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
            return true;
        }
        false
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Lifetime in seconds, for scheduling the expiry tick.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ttl_secs(&self) -> f64 {
        self.ttl.num_milliseconds() as f64 / 1000.0
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(3)
    }
}
