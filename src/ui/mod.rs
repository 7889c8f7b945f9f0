// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Title bar and the buttons that open the dialogs
//! - [`dialogs`] - Alert and custom dialogs, their visibility, and the modal layer
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod dialogs;
pub mod home;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
