// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size, and spacing value used by the dialogs and the host screen.

## Organization

- **Palette**: Base colors, including the two dialog accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Elevation shadows

## Examples

```
use iced_dialogs::ui::design_tokens::{palette, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};
assert!(scrim.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (purple scale, used by the header and host buttons)
    pub const PRIMARY_400: Color = Color::from_rgb(0.58, 0.46, 0.80);
    pub const PRIMARY_500: Color = Color::from_rgb(0.38, 0.0, 0.93);
    pub const PRIMARY_600: Color = Color::from_rgb(0.22, 0.0, 0.70);

    /// Filled "OK" action of the alert dialog (#8BC34A).
    pub const LIGHT_GREEN_500: Color = Color::from_rgb(
        0x8B as f32 / 255.0,
        0xC3 as f32 / 255.0,
        0x4A as f32 / 255.0,
    );

    /// Banner and text actions of the custom dialog (#4DB6AC).
    pub const TEAL_300: Color = Color::from_rgb(
        0x4D as f32 / 255.0,
        0xB6 as f32 / 255.0,
        0xAC as f32 / 255.0,
    );

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Layer behind an open modal.
    pub const SCRIM: f32 = 0.6;

    /// Secondary body text ("medium emphasis").
    pub const TEXT_MEDIUM: f32 = 0.74;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Location icon inside the custom dialog banner (24px scaled by 1.2).
    pub const BANNER_ICON: f32 = ICON_MD * 1.2;

    pub const HEADER_HEIGHT: f32 = 56.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Dialogs
    pub const ALERT_WIDTH: f32 = 320.0;
    pub const CUSTOM_DIALOG_WIDTH: f32 = 320.0;
    pub const BANNER_HEIGHT: f32 = 160.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog titles and the header bar.
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - dialog text, button labels
    pub const BODY: f32 = 14.0;

    /// Small body - toast text
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Outlined buttons
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;

    /// Alert buttons: 30% of the button height.
    pub const ALERT_BUTTON: f32 = super::sizing::BUTTON_HEIGHT * 0.3;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Card elevation of the custom dialog (8dp).
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);

    assert!(sizing::BANNER_ICON > sizing::ICON_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_accents_match_their_hex_values() {
        let teal = palette::TEAL_300;
        assert!((teal.r - 77.0 / 255.0).abs() < f32::EPSILON);
        assert!((teal.g - 182.0 / 255.0).abs() < f32::EPSILON);
        assert!((teal.b - 172.0 / 255.0).abs() < f32::EPSILON);

        let green = palette::LIGHT_GREEN_500;
        assert!(green.g > green.r && green.g > green.b);
    }

    #[test]
    fn alert_button_radius_is_thirty_percent_of_height() {
        assert!((radius::ALERT_BUTTON - 10.8).abs() < 1e-4);
    }
}
