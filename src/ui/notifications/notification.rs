// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue, short duration).
    #[default]
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    /// Whether the configured toast length applies to this severity.
    #[must_use]
    pub fn is_short(&self) -> bool {
        matches!(self, Severity::Info)
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message, resolved at render time.
    message_key: String,
    created_at: Instant,
    /// When the toast reached the screen. Expiry counts from here.
    shown_at: Instant,
    /// Overrides the severity default when set.
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            created_at: now,
            shown_at: now,
            custom_dismiss_duration: None,
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Restarts the expiry clock; called when the toast leaves the queue.
    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at = now;
    }

    #[must_use]
    pub fn has_custom_duration(&self) -> bool {
        self.custom_dismiss_duration.is_some()
    }

    /// Returns the time after which this notification disappears on its own.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
    }

    /// Returns whether this notification has been on screen long enough at `now`.
    #[must_use]
    pub fn should_auto_dismiss_at(&self, now: Instant) -> bool {
        self.dismiss_after()
            .is_some_and(|d| now.saturating_duration_since(self.shown_at) >= d)
    }
}
