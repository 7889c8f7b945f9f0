// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the host screen, dialogs, and toasts.

pub mod button;
pub mod container;
