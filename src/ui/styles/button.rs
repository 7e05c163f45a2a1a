// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::RibbonTheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for a ribbon tile.
///
/// Selected tiles get a brand-colored ring whose alpha follows
/// `selection_alpha`, so an animated selection fades the ring in.
pub fn tile(
    theme: &RibbonTheme,
    selected: bool,
    selection_alpha: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let ring = Color {
        a: selection_alpha.clamp(0.0, 1.0),
        ..theme.brand_primary
    };
    let background = theme.surface_secondary;
    let text_color = theme.text_primary;

    move |_theme: &Theme, status: button::Status| {
        let border = if selected {
            Border {
                color: ring,
                width: border::WIDTH_SELECTED,
                radius: radius::SM.into(),
            }
        } else if matches!(status, button::Status::Hovered) {
            Border {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..ring
                },
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                radius: radius::SM.into(),
                ..Border::default()
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for demo toolbar buttons.
pub fn toolbar(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, palette::WHITE)
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}
