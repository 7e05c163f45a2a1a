// SPDX-License-Identifier: MPL-2.0
//! Tile sizing and strip geometry.
//!
//! Sizing decisions are delegated to a [`RibbonLayout`]; the default
//! [`SquareLayout`] makes every tile a square as tall as the content area.
//! [`StripGeometry`] turns those sizes into horizontal offsets for scrolling.

use super::data_source::CameraPosition;
use super::slot::RibbonSlot;
use crate::config::defaults::{
    DEFAULT_INSET, DEFAULT_RIBBON_HEIGHT, DEFAULT_SCROLL_MS, DEFAULT_TILE_SPACING,
    DEFAULT_TRANSITION_MS,
};
use crate::media::MediaItem;
use iced::Size;
use std::fmt;
use std::time::Duration;

/// Vertical space kept free around the tiles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

/// Construction parameters of a ribbon view.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub camera_position: CameraPosition,
    pub camera_visible: bool,
    /// Total ribbon height.
    pub height: f32,
    pub insets: Insets,
    /// Gap between tiles, also used as horizontal padding.
    pub spacing: f32,
    /// Duration of insert/delete/reload transitions.
    pub transition: Duration,
    /// Duration of animated scrolling.
    pub scroll_duration: Duration,
}

impl Settings {
    /// Height available to tiles once the insets are removed.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        (self.height - self.insets.top - self.insets.bottom).max(0.0)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera_position: CameraPosition::default(),
            camera_visible: true,
            height: DEFAULT_RIBBON_HEIGHT,
            insets: Insets {
                top: DEFAULT_INSET,
                bottom: DEFAULT_INSET,
            },
            spacing: DEFAULT_TILE_SPACING,
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            scroll_duration: Duration::from_millis(DEFAULT_SCROLL_MS),
        }
    }
}

/// Sizing and transform policy consulted for every tile.
pub trait RibbonLayout: fmt::Debug {
    /// Size of the tile showing `slot` when `content_height` is available.
    fn tile_size(&self, slot: RibbonSlot<&MediaItem>, content_height: f32) -> Size;

    /// Whether the shared controls transform applies to this tile.
    fn is_transformable(&self, slot: RibbonSlot<&MediaItem>) -> bool;
}

/// Square tiles; only photo tiles follow the controls transform.
///
/// The camera tile rotates its glyph separately, so its frame stays put.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareLayout;

impl RibbonLayout for SquareLayout {
    fn tile_size(&self, _slot: RibbonSlot<&MediaItem>, content_height: f32) -> Size {
        Size::new(content_height, content_height)
    }

    fn is_transformable(&self, slot: RibbonSlot<&MediaItem>) -> bool {
        !slot.is_camera()
    }
}

/// Horizontal extents of every tile in the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripGeometry {
    starts: Vec<f32>,
    widths: Vec<f32>,
    content_width: f32,
}

impl StripGeometry {
    /// Lays tiles out left to right with `spacing` between and around them.
    #[must_use]
    pub fn new(widths: Vec<f32>, spacing: f32) -> Self {
        let mut starts = Vec::with_capacity(widths.len());
        let mut cursor = spacing;
        for width in &widths {
            starts.push(cursor);
            cursor += width + spacing;
        }
        let content_width = if widths.is_empty() { 0.0 } else { cursor };
        Self {
            starts,
            widths,
            content_width,
        }
    }

    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Largest valid scroll offset for a viewport of `viewport_width`.
    #[must_use]
    pub fn max_offset(&self, viewport_width: f32) -> f32 {
        (self.content_width - viewport_width).max(0.0)
    }

    /// Offset that centres tile `index` in the viewport, clamped to range.
    #[must_use]
    pub fn centered_offset(&self, index: usize, viewport_width: f32) -> Option<f32> {
        let start = *self.starts.get(index)?;
        let width = self.widths[index];
        let target = start + width / 2.0 - viewport_width / 2.0;
        Some(target.clamp(0.0, self.max_offset(viewport_width)))
    }

    /// Converts an absolute offset into the 0..=1 form `snap_to` expects.
    #[must_use]
    pub fn relative_offset(&self, offset: f32, viewport_width: f32) -> f32 {
        let max = self.max_offset(viewport_width);
        if max <= 0.0 {
            0.0
        } else {
            (offset / max).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaId, MediaKind};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::path::PathBuf;

    #[test]
    fn content_height_subtracts_insets() {
        let settings = Settings {
            height: 100.0,
            insets: Insets {
                top: 10.0,
                bottom: 6.0,
            },
            ..Settings::default()
        };
        assert_abs_diff_eq!(settings.content_height(), 84.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn content_height_never_negative() {
        let settings = Settings {
            height: 10.0,
            insets: Insets {
                top: 8.0,
                bottom: 8.0,
            },
            ..Settings::default()
        };
        assert_abs_diff_eq!(settings.content_height(), 0.0);
    }

    #[test]
    fn square_layout_uses_content_height_for_both_sides() {
        let item = MediaItem::new(MediaId::new(1), PathBuf::from("a.png"), MediaKind::Photo);
        let size = SquareLayout.tile_size(RibbonSlot::Photo(&item), 72.0);
        assert_abs_diff_eq!(size.width, 72.0);
        assert_abs_diff_eq!(size.height, 72.0);
        assert!(SquareLayout.is_transformable(RibbonSlot::Photo(&item)));
        assert!(!SquareLayout.is_transformable(RibbonSlot::Camera));
    }

    #[test]
    fn geometry_places_tiles_with_spacing() {
        let geometry = StripGeometry::new(vec![50.0, 50.0, 50.0], 10.0);
        // 10 | 50 | 10 | 50 | 10 | 50 | 10
        assert_abs_diff_eq!(geometry.content_width(), 190.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            geometry.centered_offset(1, 0.0).unwrap_or_default(),
            95.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn centered_offset_is_clamped() {
        let geometry = StripGeometry::new(vec![50.0; 10], 10.0);
        let viewport = 200.0;
        assert_abs_diff_eq!(geometry.centered_offset(0, viewport).unwrap_or(-1.0), 0.0);
        let last = geometry.centered_offset(9, viewport).unwrap_or(-1.0);
        assert_abs_diff_eq!(last, geometry.max_offset(viewport), epsilon = F32_EPSILON);
        assert_eq!(geometry.centered_offset(10, viewport), None);
    }

    #[test]
    fn relative_offset_handles_short_strips() {
        let geometry = StripGeometry::new(vec![50.0], 10.0);
        assert_abs_diff_eq!(geometry.relative_offset(20.0, 400.0), 0.0);

        let long = StripGeometry::new(vec![100.0; 5], 0.0);
        assert_abs_diff_eq!(long.relative_offset(150.0, 200.0), 0.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn empty_geometry_has_no_width() {
        let geometry = StripGeometry::new(Vec::new(), 10.0);
        assert_abs_diff_eq!(geometry.content_width(), 0.0);
        assert_eq!(geometry.centered_offset(0, 100.0), None);
    }
}
