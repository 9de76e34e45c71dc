//! Notification sink.
//!
//! Store operations surface short-lived, user-facing messages through a
//! [`NotificationSink`]. Notifications are fire-and-forget: nothing flows
//! back into store state, and a sink that drops everything is a valid sink.

use std::sync::{Arc, Mutex, PoisonError};

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Ordinary success/progress message.
    Info,
    /// Validation or failure message.
    Destructive,
}

/// A short-lived user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Headline shown to the user.
    pub title: String,
    /// Optional supporting line.
    pub description: Option<String>,
    /// Presentation severity.
    pub severity: Severity,
}

impl Notification {
    /// Build an informational notification.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            severity: Severity::Info,
        }
    }

    /// Build a title-only informational notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: Severity::Info,
        }
    }

    /// Build a destructive (error/validation) notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: Severity::Destructive,
        }
    }

    /// Attach a supporting line.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Receiver for user-facing notifications.
pub trait NotificationSink: std::fmt::Debug {
    /// Deliver a notification. Must not fail and must not block.
    fn notify(&self, notification: Notification);
}

/// Shared sink handle threaded into every store at construction.
pub type SharedSink = Arc<dyn NotificationSink + Send + Sync>;

/// A sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn notify(&self, _notification: Notification) {}
}

/// A sink that forwards notifications to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        let description = notification.description.as_deref().unwrap_or_default();
        match notification.severity {
            Severity::Info => {
                tracing::info!(title = %notification.title, description, "notification");
            }
            Severity::Destructive => {
                tracing::warn!(title = %notification.title, description, "notification");
            }
        }
    }
}

/// A sink that records notifications for later inspection. Test support.
#[derive(Debug, Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles of every notification seen so far, in delivery order.
    pub fn titles(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    /// Drain and return everything seen so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.seen.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
