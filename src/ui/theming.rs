// SPDX-License-Identifier: MPL-2.0
//! Ribbon color schemes and theme mode resolution.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the ribbon draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonTheme {
    /// Strip background.
    pub surface_primary: Color,
    /// Placeholder tile background (missing thumbnails, idle camera).
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    /// Selection ring.
    pub brand_primary: Color,

    /// Badge background drawn over thumbnails.
    pub overlay_background: Color,
    pub overlay_text: Color,

    /// Camera glyph color.
    pub camera_glyph: Color,
}

impl RibbonTheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
            camera_glyph: palette::GRAY_700,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
            camera_glyph: palette::GRAY_100,
        }
    }

    /// Builds the scheme matching a theme mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for RibbonTheme {
    fn default() -> Self {
        Self::dark()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The built-in Iced theme used for the surrounding widgets.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = RibbonTheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = RibbonTheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn selection_ring_is_blue_in_both_modes() {
        assert!(RibbonTheme::light().brand_primary.b > RibbonTheme::light().brand_primary.r);
        assert!(RibbonTheme::dark().brand_primary.b > RibbonTheme::dark().brand_primary.r);
    }

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert_eq!(RibbonTheme::for_mode(ThemeMode::Light), RibbonTheme::light());
        assert_eq!(RibbonTheme::for_mode(ThemeMode::Dark), RibbonTheme::dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // System mode depends on the desktop, only check it resolves
        let _ = ThemeMode::System.is_dark();
    }
}
