// SPDX-License-Identifier: MPL-2.0
//! Modal presentation: a scrim over the base view with the dialog centered on
//! top of it.
//!
//! The scrim swallows every pointer event so the base view cannot be used
//! while a dialog is open. Whether a click on the scrim dismisses the dialog
//! is decided by the dialog's [`DismissPolicy`].

use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, Stack};
use iced::Element;

/// How a dialog may be dismissed without choosing one of its actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    /// Back navigation (Escape) dismisses the dialog.
    pub on_back_press: bool,
    /// A click on the scrim dismisses the dialog.
    pub on_click_outside: bool,
}

impl DismissPolicy {
    /// Both dismissal paths enabled.
    pub const PLATFORM_DEFAULT: Self = Self {
        on_back_press: true,
        on_click_outside: true,
    };

    /// Returns the message to emit on a scrim click, if the policy allows one.
    pub fn outside_click<Message>(self, message: Message) -> Option<Message> {
        self.on_click_outside.then_some(message)
    }
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self::PLATFORM_DEFAULT
    }
}

/// Stacks `content` above `base` behind a scrim.
///
/// `on_blur` is emitted when the scrim (not the dialog) is pressed.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mut scrim = mouse_area(center(opaque(content)).style(styles::container::scrim));
    if let Some(message) = on_blur {
        scrim = scrim.on_press(message);
    }

    Stack::new().push(base).push(opaque(scrim)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allows_both_paths() {
        let policy = DismissPolicy::default();
        assert!(policy.on_back_press);
        assert_eq!(policy.outside_click(42), Some(42));
    }

    #[test]
    fn outside_click_is_dropped_when_disabled() {
        let policy = DismissPolicy {
            on_back_press: true,
            on_click_outside: false,
        };
        assert_eq!(policy.outside_click("blur"), None);
    }
}
