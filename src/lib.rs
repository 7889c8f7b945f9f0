// SPDX-License-Identifier: MPL-2.0
//! `iced_dialogs` shows two modal dialog patterns built with the Iced GUI
//! framework: a styled confirmation alert and a custom card dialog whose
//! actions raise transient notifications.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logger;
pub mod ui;
