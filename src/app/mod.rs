// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the dialog visibility flags, the localization bundle,
//! and the toast manager, and translates messages into state changes. All
//! mutations happen in `update`, one message at a time.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::dialogs::Visibility;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Which dialogs are open. Both start closed.
    visibility: Visibility,
    theme: Theme,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visibility", &self.visibility)
            .field("theme", &self.theme)
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function but flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, &Config::default())
    }
}

impl App {
    /// Initializes application state from CLI flags and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        let mut app = Self::with_config(flags.lang, &config);

        if let Some(err) = &config_warning {
            log::warn!("Falling back to default settings: {err}");
        }
        app.report_startup_warnings(config_warning.into_iter().chain(flags.startup_warnings));

        (app, Task::none())
    }

    /// Shows each non-fatal startup error as a warning toast.
    fn report_startup_warnings(&mut self, warnings: impl IntoIterator<Item = Error>) {
        for err in warnings {
            self.notifications.push(Notification::warning(err.i18n_key()));
        }
    }

    /// Builds the initial state for a given locale override and config.
    #[must_use]
    pub fn with_config(lang: Option<String>, config: &Config) -> Self {
        Self {
            i18n: I18n::new(lang, config),
            visibility: Visibility::new(),
            // System mode is detected here only, never per frame.
            theme: config.general.theme_mode.theme(),
            notifications: notifications::Manager::with_short_duration(
                config.notifications.duration(),
            ),
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            visibility: &mut self.visibility,
            notifier: &mut self.notifications,
        };

        match message {
            Message::Home(home_message) => update::handle_home_message(&mut ctx, &home_message),
            Message::Alert(alert_message) => update::handle_alert_message(&mut ctx, &alert_message),
            Message::Custom(custom_message) => {
                update::handle_custom_message(&mut ctx, &custom_message)
            }
            Message::BackPressed => update::handle_back_pressed(&mut ctx),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick_at(now);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            visibility: self.visibility,
            notifications: &self.notifications,
        })
    }
}
