// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::dialogs::{alert, custom};
use crate::ui::home;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Alert(alert::Message),
    Custom(custom::Message),
    /// Back navigation (Escape key).
    BackPressed,
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DIALOGS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Non-fatal errors raised before the window opened, shown as toasts.
    pub startup_warnings: Vec<Error>,
}
