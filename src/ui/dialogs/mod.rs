// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs shown above the home screen.
//!
//! - [`visibility`] - Which dialogs are currently open
//! - [`modal`] - Scrim + centered surface, with a per-dialog dismiss policy
//! - [`alert`] - Styled confirmation alert (Cancel / OK)
//! - [`custom`] - Card dialog with icon banner and two text actions
//!
//! Each dialog follows the "state down, messages up" pattern: its `view`
//! emits a `Message`, its `update` turns that into an `Event`, and the
//! application decides what the event does to the visibility state.

pub mod alert;
pub mod custom;
pub mod modal;
pub mod visibility;

pub use modal::DismissPolicy;
pub use visibility::{DialogKind, DialogState, Presence, Visibility};
