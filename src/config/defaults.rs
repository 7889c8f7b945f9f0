// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default lifetime of a transient notification, in milliseconds.
///
/// Matches the length of a "short" toast.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 2000;

/// Minimum notification lifetime, in milliseconds.
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Maximum notification lifetime, in milliseconds.
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 10_000;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config, nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS <= DEFAULT_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
};
