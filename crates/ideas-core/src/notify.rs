//! User-facing notifications and the confirmation prompt.

use std::time::{Duration, Instant};

use serde::Serialize;

/// How long a notification stays visible.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A fire-and-forget message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Sink for notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Blocking yes/no question, asked before destructive operations.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Single-slot toast: a new notification replaces the visible one, and each
/// stays visible for a fixed window from the moment it was shown.
#[derive(Debug, Clone)]
pub struct Toast {
    duration: Duration,
    current: Option<(Notification, Instant)>,
}

impl Toast {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    /// Show `notification` at `now`, replacing whatever was visible.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some((notification, now));
    }

    /// The notification visible at `now`, if its window has not elapsed.
    #[must_use]
    pub fn visible(&self, now: Instant) -> Option<&Notification> {
        self.current.as_ref().and_then(|(notification, shown_at)| {
            (now.saturating_duration_since(*shown_at) < self.duration).then_some(notification)
        })
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}
