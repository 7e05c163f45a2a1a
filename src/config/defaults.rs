// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Geometry**: Ribbon height, insets and tile spacing
//! - **Animation**: Transition and scroll durations

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Default ribbon height in logical pixels.
pub const DEFAULT_RIBBON_HEIGHT: f32 = 96.0;

/// Minimum ribbon height. Below this tiles become unusable.
pub const MIN_RIBBON_HEIGHT: f32 = 32.0;

/// Maximum ribbon height.
pub const MAX_RIBBON_HEIGHT: f32 = 512.0;

/// Default top and bottom content insets.
pub const DEFAULT_INSET: f32 = 8.0;

/// Maximum inset on either edge.
pub const MAX_INSET: f32 = 64.0;

/// Default horizontal gap between tiles.
pub const DEFAULT_TILE_SPACING: f32 = 6.0;

/// Maximum horizontal gap between tiles.
pub const MAX_TILE_SPACING: f32 = 48.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of insert/delete/reload transitions (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 220;

/// Default duration of animated scrolling (milliseconds).
pub const DEFAULT_SCROLL_MS: u64 = 300;

/// Maximum duration for any ribbon animation (milliseconds).
pub const MAX_ANIMATION_MS: u64 = 2_000;

/// Frame interval used while an animation is running (~60 FPS).
pub const ANIMATION_FRAME_MS: u64 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_defaults_are_within_bounds() {
        assert!(DEFAULT_RIBBON_HEIGHT >= MIN_RIBBON_HEIGHT);
        assert!(DEFAULT_RIBBON_HEIGHT <= MAX_RIBBON_HEIGHT);
    }

    #[test]
    fn default_insets_leave_room_for_tiles() {
        assert!(DEFAULT_RIBBON_HEIGHT - 2.0 * DEFAULT_INSET > 0.0);
        assert!(MIN_RIBBON_HEIGHT > 0.0);
    }

    #[test]
    fn animation_defaults_are_within_bounds() {
        assert!(DEFAULT_TRANSITION_MS <= MAX_ANIMATION_MS);
        assert!(DEFAULT_SCROLL_MS <= MAX_ANIMATION_MS);
        assert!(ANIMATION_FRAME_MS < DEFAULT_TRANSITION_MS);
    }
}
