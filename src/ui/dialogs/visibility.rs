// SPDX-License-Identifier: MPL-2.0
//! Open/closed state of the two dialogs.
//!
//! The two flags are independent: nothing prevents both dialogs from being
//! open at once.

/// Lifecycle of a single dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == DialogState::Open
    }

    #[must_use]
    fn toggled(self) -> Self {
        match self {
            DialogState::Closed => DialogState::Open,
            DialogState::Open => DialogState::Closed,
        }
    }
}

/// Identifies one of the two dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Alert,
    Custom,
}

/// Combined view of both flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    None,
    AlertOnly,
    CustomOnly,
    Both,
}

/// Visibility flags for the alert and the custom dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    alert: DialogState,
    custom: DialogState,
}

impl Visibility {
    /// Both dialogs closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_alert(&mut self) {
        self.alert = self.alert.toggled();
    }

    pub fn toggle_custom(&mut self) {
        self.custom = self.custom.toggled();
    }

    /// Closes the alert. Returns `true` if it was open.
    pub fn close_alert(&mut self) -> bool {
        std::mem::take(&mut self.alert).is_open()
    }

    /// Closes the custom dialog. Returns `true` if it was open.
    pub fn close_custom(&mut self) -> bool {
        std::mem::take(&mut self.custom).is_open()
    }

    #[must_use]
    pub fn alert(&self) -> DialogState {
        self.alert
    }

    #[must_use]
    pub fn custom(&self) -> DialogState {
        self.custom
    }

    #[must_use]
    pub fn is_alert_open(&self) -> bool {
        self.alert.is_open()
    }

    #[must_use]
    pub fn is_custom_open(&self) -> bool {
        self.custom.is_open()
    }

    #[must_use]
    pub fn presence(&self) -> Presence {
        match (self.alert.is_open(), self.custom.is_open()) {
            (false, false) => Presence::None,
            (true, false) => Presence::AlertOnly,
            (false, true) => Presence::CustomOnly,
            (true, true) => Presence::Both,
        }
    }

    /// Dialog drawn on top, which receives back navigation.
    ///
    /// The custom dialog is stacked above the alert.
    #[must_use]
    pub fn topmost(&self) -> Option<DialogKind> {
        if self.custom.is_open() {
            Some(DialogKind::Custom)
        } else if self.alert.is_open() {
            Some(DialogKind::Alert)
        } else {
            None
        }
    }
}
