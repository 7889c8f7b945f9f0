// SPDX-License-Identifier: MPL-2.0
//! Transient notifications ("toasts").
//!
//! Notifications appear in the bottom-right corner, stay for a short while,
//! and disappear on their own. They never block interaction and never report
//! anything back to the code that raised them.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget for rendering notifications
//!
//! # Usage
//!
//! ```no_run
//! use iced_dialogs::i18n::fluent::I18n;
//! use iced_dialogs::ui::notifications::{Manager, Notification, Notify, Toast};
//!
//! let i18n = I18n::default();
//! let mut manager = Manager::new();
//! manager.notify(Notification::info("notification-dialog-dismissed"));
//!
//! let _overlay = Toast::view_overlay(&manager, &i18n);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;

/// Fire-and-forget sink for transient notifications.
///
/// Showing a notification cannot fail from the caller's point of view and
/// returns nothing.
pub trait Notify {
    fn notify(&mut self, notification: Notification);
}
