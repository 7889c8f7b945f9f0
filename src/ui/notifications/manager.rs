// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use super::Notify;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    /// Lifetime applied to success and info toasts without a custom duration.
    short_duration: Option<Duration>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager whose short toasts last `duration`.
    #[must_use]
    pub fn with_short_duration(duration: Duration) -> Self {
        Self {
            short_duration: Some(duration),
            ..Self::default()
        }
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, mut notification: Notification) {
        if let Some(duration) = self.short_duration {
            if notification.severity().is_short() && !notification.has_custom_duration() {
                notification = notification.auto_dismiss(duration);
            }
        }

        match notification.severity() {
            Severity::Warning => log::warn!("Notification: {}", notification.message_key()),
            Severity::Error => log::error!("Notification: {}", notification.message_key()),
            Severity::Info => {
                log::debug!("Notification: {}", notification.message_key());
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            notification.mark_shown(Instant::now());
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that has expired at `now`.
    ///
    /// Toasts promoted from the queue start their lifetime at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.should_auto_dismiss_at(now));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns visible and queued notifications alike.
    pub fn all(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().chain(self.queue.iter())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(mut notification) => {
                    notification.mark_shown(now);
                    self.visible.push_back(notification);
                }
                None => break,
            }
        }
    }
}

impl Notify for Manager {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
