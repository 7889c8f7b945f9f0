// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The home screen is always rendered. Each open dialog wraps everything
//! below it in a modal layer, and toasts float above all of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::dialogs::modal::modal;
use crate::ui::dialogs::{alert, custom, Visibility};
use crate::ui::home;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub visibility: Visibility,
    pub notifications: &'a Manager,
}

/// Renders the home screen with any open dialogs and toasts on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content: Element<'_, Message> =
        home::view(home::ViewContext { i18n: ctx.i18n }).map(Message::Home);

    if ctx.visibility.is_alert_open() {
        content = modal(
            content,
            alert::view(alert::ViewContext { i18n: ctx.i18n }).map(Message::Alert),
            alert::on_blur().map(Message::Alert),
        );
    }

    // Drawn after the alert so it sits on top when both are open.
    if ctx.visibility.is_custom_open() {
        content = modal(
            content,
            custom::view(custom::ViewContext { i18n: ctx.i18n }).map(Message::Custom),
            custom::on_blur().map(Message::Custom),
        );
    }

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(toasts)
        .into()
}
