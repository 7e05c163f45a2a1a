// SPDX-License-Identifier: MPL-2.0
//! Shared visual infrastructure for the ribbon and the demo shell.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and ribbon color schemes
//! - [`styles`] - Centralized widget styles (tiles, strip, badges)
//! - [`icons`] - Embedded vector glyphs

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
