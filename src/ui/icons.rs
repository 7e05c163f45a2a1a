// SPDX-License-Identifier: MPL-2.0
//! Vector glyphs drawn by the ribbon.
//!
//! Glyphs are embedded as SVG sources and their handles are cached with
//! `OnceLock`, so every tile shares one parsed handle. Glyphs are single
//! color; callers tint them through the `svg` widget style.

use iced::widget::svg::{self, Svg};
use iced::Length;
use std::sync::OnceLock;

macro_rules! define_glyph {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| svg::Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const CAMERA_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M9 3 7.2 5H4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V7a2 2 0 0 0-2-2h-3.2L15 3H9zm3 5a5 5 0 1 1 0 10 5 5 0 0 1 0-10zm0 2a3 3 0 1 0 0 6 3 3 0 0 0 0-6z"/></svg>"#;

const IMAGE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zm0 12.5V18h16v-3l-4-4-5 5-3-3-4 3.5zM8.5 7a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3z"/></svg>"#;

const PLAY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M8 5v14l11-7z"/></svg>"#;

define_glyph!(camera, CAMERA_SVG, "Camera body with lens, shown on the camera tile.");
define_glyph!(image, IMAGE_SVG, "Framed landscape, shown while a photo thumbnail loads.");
define_glyph!(play, PLAY_SVG, "Triangle pointing right, shown for videos without a thumbnail.");

/// Sizes a glyph to a square of `size` logical pixels.
pub fn sized<'a>(glyph: Svg<'a>, size: f32) -> Svg<'a> {
    glyph.width(Length::Fixed(size)).height(Length::Fixed(size))
}
