// SPDX-License-Identifier: MPL-2.0
//! Quarter-turn transforms shared by the ribbon tiles.
//!
//! The picker rotates its controls with the device instead of relayouting
//! them, so every transformable tile and the camera glyph render with the same
//! rotation. Camera previews carry their own orientation.

use iced::{Radians, Rotation};

/// Rotation applied to ribbon controls, in 90° increments.
///
/// # Example
///
/// ```
/// use media_ribbon::ribbon::ControlsTransform;
///
/// let transform = ControlsTransform::IDENTITY.rotate_clockwise();
/// assert_eq!(transform.degrees(), 90);
/// assert_eq!(ControlsTransform::new(450).degrees(), 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ControlsTransform(u16);

impl ControlsTransform {
    /// No rotation.
    pub const IDENTITY: Self = Self(0);

    /// Normalizes any angle down to a 90° increment in the 0-270° range.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(((degrees / 90) * 90) % 360)
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0).to_radians()
    }

    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    #[must_use]
    pub fn rotate_counterclockwise(self) -> Self {
        Self((self.0 + 270) % 360)
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.0 == 0
    }

    /// Iced rotation for image and svg widgets.
    ///
    /// `Solid` keeps the tile footprint fixed while the content turns.
    #[must_use]
    pub fn rotation(self) -> Rotation {
        Rotation::Solid(Radians(self.radians()))
    }
}

/// Physical orientation of the camera sensor relative to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraOrientation {
    #[default]
    Portrait,
    LandscapeLeft,
    PortraitUpsideDown,
    LandscapeRight,
}

impl CameraOrientation {
    /// Rotation that brings a preview frame upright.
    #[must_use]
    pub fn preview_transform(self) -> ControlsTransform {
        match self {
            CameraOrientation::Portrait => ControlsTransform::IDENTITY,
            CameraOrientation::LandscapeLeft => ControlsTransform::new(90),
            CameraOrientation::PortraitUpsideDown => ControlsTransform::new(180),
            CameraOrientation::LandscapeRight => ControlsTransform::new(270),
        }
    }
}
