// SPDX-License-Identifier: MPL-2.0
//! Card dialog with an icon banner, an explanation, and two text actions.

use super::modal::DismissPolicy;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Platform default: back navigation and outside clicks both dismiss.
pub const DISMISS_POLICY: DismissPolicy = DismissPolicy::PLATFORM_DEFAULT;

/// Accent used by the banner and both text actions.
pub const ACCENT: Color = palette::TEAL_300;

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Back navigation or a click outside the card.
    Dismiss,
    /// "NOT NOW"
    NotNow,
    /// "CONTINUE"
    Continue,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Dismissed,
    Negative,
    Positive,
}

impl Event {
    /// i18n key of the notification raised once the dialog has closed.
    #[must_use]
    pub fn notification_key(self) -> &'static str {
        match self {
            Event::Dismissed => "notification-dialog-dismissed",
            Event::Negative => "notification-negative-clicked",
            Event::Positive => "notification-positive-clicked",
        }
    }
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Dismiss => Event::Dismissed,
        Message::NotNow => Event::Negative,
        Message::Continue => Event::Positive,
    }
}

/// Message emitted when the scrim behind the card is clicked.
#[must_use]
pub fn on_blur() -> Option<Message> {
    DISMISS_POLICY.outside_click(Message::Dismiss)
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let icon = icons::tinted(
        icons::sized(icons::location(), sizing::BANNER_ICON),
        palette::WHITE,
    );

    let banner = Container::new(icon)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BANNER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::banner(ACCENT));

    let body = text(ctx.i18n.tr("custom-dialog-body"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(Color {
                a: opacity::TEXT_MEDIUM,
                ..theme.palette().text
            }),
        });

    let actions = Row::new()
        .spacing(spacing::XXS)
        .push(text_action(
            ctx.i18n.tr("custom-dialog-negative-button"),
            Message::NotNow,
        ))
        .push(text_action(
            ctx.i18n.tr("custom-dialog-positive-button"),
            Message::Continue,
        ));

    let actions = Container::new(actions)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right);

    let details = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(body)
        .push(actions);

    Container::new(Column::new().push(banner).push(details))
        .width(Length::Fixed(sizing::CUSTOM_DIALOG_WIDTH))
        .style(styles::container::card)
        .into()
}

fn text_action<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XS)
        .style(styles::button::text_action(ACCENT))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_action_maps_to_its_own_event() {
        assert_eq!(update(&Message::Dismiss), Event::Dismissed);
        assert_eq!(update(&Message::NotNow), Event::Negative);
        assert_eq!(update(&Message::Continue), Event::Positive);
    }

    #[test]
    fn outside_click_dismisses() {
        assert_eq!(on_blur(), Some(Message::Dismiss));
    }

    #[test]
    fn notification_texts_match_their_source() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let text_for = |event: Event| i18n.tr(event.notification_key());

        assert_eq!(text_for(Event::Dismissed), "Dialog dismissed!");
        assert_eq!(text_for(Event::Negative), "Negative Button Clicked!");
        assert_eq!(text_for(Event::Positive), "Positive Button Clicked!");
    }

    #[test]
    fn view_builds() {
        let i18n = I18n::default();
        let _ = view(ViewContext { i18n: &i18n });
    }
}
