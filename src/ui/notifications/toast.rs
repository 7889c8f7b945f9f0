// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let message_widget = Text::new(i18n.tr(notification.message_key())).size(typography::BODY_SM);

        let dismiss_button = tooltip(
            button(icons::sized(icons::cross(), sizing::ICON_SM))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(styles::button::dismiss),
            Text::new(i18n.tr("notification-dismiss-tooltip")).size(typography::BODY_SM),
            tooltip::Position::Left,
        )
        .gap(spacing::XXS)
        .padding(spacing::XXS)
        .style(container::rounded_box);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(accent))
            .into()
    }

    /// Renders all visible notifications stacked in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_builds_with_and_without_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager, &i18n);

        manager.push(Notification::info("notification-dialog-dismissed"));
        manager.push(Notification::error("error-config"));
        let _ = Toast::view_overlay(&manager, &i18n);
    }

    #[test]
    fn dismiss_tooltip_is_translated() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        assert_eq!(i18n.tr("notification-dismiss-tooltip"), "Dismiss");
    }
}
