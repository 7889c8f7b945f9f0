// SPDX-License-Identifier: MPL-2.0
//! Styled confirmation alert.
//!
//! Title, body text, and two full-width buttons stacked vertically. Both
//! buttons close the alert; neither carries a distinct outcome.

use super::modal::DismissPolicy;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::{self, Font};
use iced::widget::{button, text, Column, Container};
use iced::{Element, Length};

/// Back navigation closes the alert, a click outside does not.
pub const DISMISS_POLICY: DismissPolicy = DismissPolicy {
    on_back_press: true,
    on_click_outside: false,
};

/// Contextual data needed to render the alert.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Cancel,
    Confirm,
    /// Back navigation or, if the policy allowed it, a click outside.
    DismissRequest,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Dismissed,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Cancel | Message::Confirm | Message::DismissRequest => Event::Dismissed,
    }
}

/// Message emitted when the scrim behind the alert is clicked.
#[must_use]
pub fn on_blur() -> Option<Message> {
    DISMISS_POLICY.outside_click(Message::DismissRequest)
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text(ctx.i18n.tr("alert-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        });

    let body = text(ctx.i18n.tr("alert-body")).size(typography::BODY);

    let cancel = button(
        text(ctx.i18n.tr("alert-cancel-button"))
            .size(typography::BODY)
            .center()
            .width(Length::Fill),
    )
    .on_press(Message::Cancel)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::alert_outlined);

    let confirm = button(
        text(ctx.i18n.tr("alert-confirm-button"))
            .size(typography::BODY)
            .center()
            .width(Length::Fill),
    )
    .on_press(Message::Confirm)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::alert_filled);

    let buttons = Column::new()
        .spacing(spacing::XS)
        .push(cancel)
        .push(confirm);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(body)
        .push(buttons);

    Container::new(content)
        .width(Length::Fixed(sizing::ALERT_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::alert_surface)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_and_confirm_are_indistinguishable() {
        assert_eq!(update(&Message::Cancel), update(&Message::Confirm));
        assert_eq!(update(&Message::Cancel), Event::Dismissed);
    }

    #[test]
    fn outside_click_is_not_wired() {
        assert!(!DISMISS_POLICY.on_click_outside);
        assert_eq!(on_blur(), None);
    }

    #[test]
    fn back_press_dismisses() {
        assert!(DISMISS_POLICY.on_back_press);
        assert_eq!(update(&Message::DismissRequest), Event::Dismissed);
    }

    #[test]
    fn view_builds() {
        let i18n = I18n::default();
        let _ = view(ViewContext { i18n: &i18n });
    }
}
