// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler runs synchronously on the UI thread and returns
//! `Task::none()`: no dialog action starts background work.

use super::Message;
use crate::ui::dialogs::{alert, custom, DialogKind, Visibility};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::notifications::{Notification, Notify};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub visibility: &'a mut Visibility,
    pub notifier: &'a mut dyn Notify,
}

/// Handles home screen buttons: each one flips its dialog's flag.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: &home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::ToggleAlert => {
            ctx.visibility.toggle_alert();
            log::debug!("Alert dialog is now {:?}", ctx.visibility.alert());
        }
        HomeEvent::ToggleCustom => {
            ctx.visibility.toggle_custom();
            log::debug!("Custom dialog is now {:?}", ctx.visibility.custom());
        }
    }
    Task::none()
}

/// Handles alert actions. Cancel, OK, and dismissal all close the alert
/// without any notification.
pub fn handle_alert_message(ctx: &mut UpdateContext<'_>, message: &alert::Message) -> Task<Message> {
    match alert::update(message) {
        alert::Event::Dismissed => {
            if ctx.visibility.close_alert() {
                log::info!("Alert dialog closed via {message:?}");
            } else {
                log::debug!("Ignoring {message:?}: alert dialog is not open");
            }
        }
    }
    Task::none()
}

/// Handles custom dialog actions: close the dialog, then raise exactly one
/// notification naming the action.
pub fn handle_custom_message(
    ctx: &mut UpdateContext<'_>,
    message: &custom::Message,
) -> Task<Message> {
    let event = custom::update(message);

    if !ctx.visibility.close_custom() {
        log::debug!("Ignoring {event:?}: custom dialog is not open");
        return Task::none();
    }

    log::info!("Custom dialog closed ({event:?})");
    ctx.notifier.notify(Notification::info(event.notification_key()));
    Task::none()
}

/// Routes back navigation to the topmost dialog, if its policy allows it.
pub fn handle_back_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.visibility.topmost() {
        Some(DialogKind::Custom) if custom::DISMISS_POLICY.on_back_press => {
            handle_custom_message(ctx, &custom::Message::Dismiss)
        }
        Some(DialogKind::Alert) if alert::DISMISS_POLICY.on_back_press => {
            handle_alert_message(ctx, &alert::Message::DismissRequest)
        }
        _ => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects notification keys instead of displaying them.
    #[derive(Default)]
    struct Recorder {
        keys: Vec<String>,
    }

    impl Notify for Recorder {
        fn notify(&mut self, notification: Notification) {
            self.keys.push(notification.message_key().to_string());
        }
    }

    fn with_ctx<R>(
        visibility: &mut Visibility,
        recorder: &mut Recorder,
        f: impl FnOnce(&mut UpdateContext<'_>) -> R,
    ) -> R {
        let mut ctx = UpdateContext {
            visibility,
            notifier: recorder,
        };
        f(&mut ctx)
    }

    #[test]
    fn home_buttons_toggle_flags() {
        let mut visibility = Visibility::new();
        let mut recorder = Recorder::default();

        with_ctx(&mut visibility, &mut recorder, |ctx| {
            let _ = handle_home_message(ctx, &home::Message::OpenAlertPressed);
            let _ = handle_home_message(ctx, &home::Message::OpenDialogPressed);
        });

        assert!(visibility.is_alert_open());
        assert!(visibility.is_custom_open());
        assert!(recorder.keys.is_empty());
    }

    #[test]
    fn alert_actions_close_without_notification() {
        for action in [alert::Message::Cancel, alert::Message::Confirm] {
            let mut visibility = Visibility::new();
            visibility.toggle_alert();
            let mut recorder = Recorder::default();

            with_ctx(&mut visibility, &mut recorder, |ctx| {
                let _ = handle_alert_message(ctx, &action);
            });

            assert!(!visibility.is_alert_open(), "{action:?} should close the alert");
            assert!(recorder.keys.is_empty());
        }
    }

    #[test]
    fn custom_actions_notify_exactly_once() {
        let cases = [
            (custom::Message::Dismiss, "notification-dialog-dismissed"),
            (custom::Message::NotNow, "notification-negative-clicked"),
            (custom::Message::Continue, "notification-positive-clicked"),
        ];

        for (action, expected_key) in cases {
            let mut visibility = Visibility::new();
            visibility.toggle_custom();
            let mut recorder = Recorder::default();

            with_ctx(&mut visibility, &mut recorder, |ctx| {
                let _ = handle_custom_message(ctx, &action);
            });

            assert!(!visibility.is_custom_open());
            assert_eq!(recorder.keys, vec![expected_key.to_string()]);
        }
    }

    #[test]
    fn custom_action_while_closed_is_ignored() {
        let mut visibility = Visibility::new();
        let mut recorder = Recorder::default();

        with_ctx(&mut visibility, &mut recorder, |ctx| {
            let _ = handle_custom_message(ctx, &custom::Message::Continue);
        });

        assert!(!visibility.is_custom_open());
        assert!(recorder.keys.is_empty());
    }

    #[test]
    fn back_press_closes_topmost_dialog_only() {
        let mut visibility = Visibility::new();
        visibility.toggle_alert();
        visibility.toggle_custom();
        let mut recorder = Recorder::default();

        with_ctx(&mut visibility, &mut recorder, |ctx| {
            let _ = handle_back_pressed(ctx);
        });
        assert!(visibility.is_alert_open());
        assert!(!visibility.is_custom_open());
        assert_eq!(recorder.keys, vec!["notification-dialog-dismissed".to_string()]);

        with_ctx(&mut visibility, &mut recorder, |ctx| {
            let _ = handle_back_pressed(ctx);
        });
        assert!(!visibility.is_alert_open());
        assert_eq!(recorder.keys.len(), 1);
    }

    #[test]
    fn back_press_with_nothing_open_is_a_no_op() {
        let mut visibility = Visibility::new();
        let mut recorder = Recorder::default();

        with_ctx(&mut visibility, &mut recorder, |ctx| {
            let _ = handle_back_pressed(ctx);
        });

        assert_eq!(visibility, Visibility::new());
        assert!(recorder.keys.is_empty());
    }
}
