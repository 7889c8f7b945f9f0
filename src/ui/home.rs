// SPDX-License-Identifier: MPL-2.0
//! Home screen: a title bar and the two buttons that open the dialogs.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenAlertPressed,
    OpenDialogPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ToggleAlert,
    ToggleCustom,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenAlertPressed => Event::ToggleAlert,
        Message::OpenDialogPressed => Event::ToggleCustom,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Container::new(text(ctx.i18n.tr("header-title")).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::header);

    let buttons = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(host_button(
            ctx.i18n.tr("home-open-alert-button"),
            Message::OpenAlertPressed,
        ))
        .push(host_button(
            ctx.i18n.tr("home-open-dialog-button"),
            Message::OpenDialogPressed,
        ));

    let body = Container::new(buttons)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body)
        .into()
}

fn host_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_toggles() {
        assert_eq!(update(&Message::OpenAlertPressed), Event::ToggleAlert);
        assert_eq!(update(&Message::OpenDialogPressed), Event::ToggleCustom);
    }

    #[test]
    fn view_builds() {
        let i18n = I18n::default();
        let _ = view(ViewContext { i18n: &i18n });
    }
}
