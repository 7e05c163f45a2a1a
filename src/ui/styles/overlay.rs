// SPDX-License-Identifier: MPL-2.0
//! Styles for glyphs drawn over tiles.

use iced::widget::svg;
use iced::{Color, Theme};

/// Tints a single-color glyph.
pub fn glyph(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
