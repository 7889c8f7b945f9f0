// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached using `OnceLock`. Sources are single-color glyphs so they can be
//! tinted with [`tinted`].

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning an `Svg` backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    location,
    "location.svg",
    "Location pin: shown in the custom dialog banner."
);
define_icon!(cross, "cross.svg", "Cross: dismisses a toast.");

/// Resizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints every path of the icon with `color`.
pub fn tinted(icon: Svg<'_>, color: Color) -> Svg<'_> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_can_be_built_repeatedly() {
        // The second call goes through the cached handle
        let _ = sized(location(), 24.0);
        let _ = sized(location(), 24.0);
        let _ = tinted(cross(), Color::WHITE);
    }
}
