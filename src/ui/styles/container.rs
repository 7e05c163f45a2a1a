// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::RibbonTheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Background of the whole strip.
pub fn strip(theme: &RibbonTheme) -> impl Fn(&Theme) -> container::Style {
    let background = theme.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Tile background shown while no thumbnail or preview frame is available.
pub fn placeholder(theme: &RibbonTheme) -> impl Fn(&Theme) -> container::Style {
    let background = theme.surface_secondary;
    let text_color = theme.text_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small label drawn over a thumbnail corner, e.g. a video duration.
pub fn badge(theme: &RibbonTheme) -> impl Fn(&Theme) -> container::Style {
    let background = theme.overlay_background;
    let text_color = theme.overlay_text;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
