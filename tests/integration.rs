// SPDX-License-Identifier: MPL-2.0
use iced_dialogs::app::{App, Message};
use iced_dialogs::config::{self, Config, GeneralConfig, NotificationsConfig};
use iced_dialogs::i18n::fluent::I18n;
use iced_dialogs::ui::dialogs::custom;
use iced_dialogs::ui::home;
use iced_dialogs::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("alert-confirm-button"), "OK");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write French config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load French config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_missing_config_dir_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().join("absent")));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn test_malformed_config_reports_error_and_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write malformed config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    let err = warning.expect("malformed file should be reported");
    assert_eq!(err.i18n_key(), "error-config");
}

#[test]
fn test_notification_duration_flows_into_app() {
    let config = Config {
        notifications: NotificationsConfig {
            duration_ms: Some(4_000),
        },
        ..Config::default()
    };
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.notifications.duration(), Duration::from_millis(4_000));

    let mut app = App::with_config(Some("en-US".to_string()), &loaded);
    let _ = app.update(Message::Home(home::Message::OpenDialogPressed));
    let _ = app.update(Message::Custom(custom::Message::Continue));

    let toast = app
        .notifications()
        .visible()
        .next()
        .expect("a toast should be visible");
    assert_eq!(toast.dismiss_after(), Some(Duration::from_millis(4_000)));
    let shown_at = toast.shown_at();

    let _ = app.update(Message::Tick(shown_at + Duration::from_millis(3_900)));
    assert_eq!(app.notifications().visible_count(), 1);

    let _ = app.update(Message::Tick(shown_at + Duration::from_millis(4_000)));
    assert_eq!(app.notifications().visible_count(), 0);
}
